#![cfg(feature = "dev")]
//! Tests for input validation.
//!
//! ## Test Organization
//!
//! 1. **Values** - Emptiness, minimum length, finiteness
//! 2. **Ceiling** - Sieve bounds
//! 3. **Display** - Error messages

use seqext::internals::primitives::errors::SeqError;
use seqext::internals::primitives::validator::Validator;

// ============================================================================
// Values Tests
// ============================================================================

/// Test that validation stops at emptiness before length.
#[test]
fn test_validate_values_empty_first() {
    let xs: [f64; 0] = [];
    assert_eq!(Validator::validate_values(&xs, 2), Err(SeqError::EmptyInput));
}

/// Test minimum length.
#[test]
fn test_validate_values_too_few() {
    assert_eq!(
        Validator::validate_values(&[1.0f64, 2.0], 3),
        Err(SeqError::TooFewPoints { got: 2, min: 3 })
    );
    assert_eq!(Validator::validate_values(&[1.0f64, 2.0], 2), Ok(()));
}

/// Test that the first non-finite value is reported.
#[test]
fn test_validate_values_reports_first_non_finite() {
    let xs = [0.0f32, f32::NEG_INFINITY, f32::NAN];
    assert_eq!(
        Validator::validate_values(&xs, 1),
        Err(SeqError::InvalidNumericValue("values[1]=-inf".to_string()))
    );
}

// ============================================================================
// Ceiling Tests
// ============================================================================

/// Test sieve ceiling bounds.
#[test]
fn test_validate_ceiling() {
    assert!(Validator::validate_ceiling(1, 100).is_ok());
    assert!(Validator::validate_ceiling(100, 100).is_ok());
    assert_eq!(
        Validator::validate_ceiling(0, 100),
        Err(SeqError::CeilingOutOfRange { got: 0, max: 100 })
    );
    assert_eq!(
        Validator::validate_ceiling(101, 100),
        Err(SeqError::CeilingOutOfRange { got: 101, max: 100 })
    );
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test error messages.
#[test]
fn test_error_display() {
    assert_eq!(SeqError::EmptyInput.to_string(), "Input sequence is empty");
    assert_eq!(
        SeqError::TooFewPoints { got: 1, min: 2 }.to_string(),
        "Too few points: got 1, need at least 2"
    );
}

/// Test that the error type works with `?` into `Box<dyn Error>`.
#[cfg(feature = "std")]
#[test]
fn test_error_boxes() -> Result<(), Box<dyn std::error::Error>> {
    Validator::validate_ceiling(10, 100)?;
    let boxed: Box<dyn std::error::Error> = Box::new(SeqError::EmptyInput);
    assert_eq!(boxed.to_string(), "Input sequence is empty");
    Ok(())
}
