#![cfg(feature = "dev")]
//! Tests for the bounded prime sieve.
//!
//! These tests verify:
//! - Largest prime not exceeding a ceiling
//! - Ceiling bounds and the strict exclusion of 0 and 1
//! - Primality queries on a reusable sieve
//!
//! ## Test Organization
//!
//! 1. **Nearest Previous Prime** - Known values
//! 2. **Bounds** - Out-of-range ceilings
//! 3. **Sieve Queries** - `is_prime`, `primes`, `largest`

use seqext::internals::math::sieve::{MAX_SIEVE_CEILING, Sieve, nearest_previous_prime};
use seqext::internals::primitives::errors::SeqError;

// ============================================================================
// Nearest Previous Prime Tests
// ============================================================================

/// Test known values.
#[test]
fn test_nearest_previous_prime_known() {
    assert_eq!(nearest_previous_prime(10), Some(7));
    assert_eq!(nearest_previous_prime(2), Some(2));
    assert_eq!(nearest_previous_prime(3), Some(3));
    assert_eq!(nearest_previous_prime(4), Some(3));
    assert_eq!(nearest_previous_prime(97), Some(97));
    assert_eq!(nearest_previous_prime(100), Some(97));
}

/// Test that squares of primes are struck.
#[test]
fn test_prime_squares_are_composite() {
    assert_eq!(nearest_previous_prime(25), Some(23));
    assert_eq!(nearest_previous_prime(49), Some(47));
    assert_eq!(nearest_previous_prime(121), Some(113));
}

/// Test the largest accepted ceiling.
///
/// Verifies: 46337 is the largest prime below 46340.
#[test]
fn test_nearest_previous_prime_at_bound() {
    assert_eq!(nearest_previous_prime(MAX_SIEVE_CEILING), Some(46337));
}

// ============================================================================
// Bounds Tests
// ============================================================================

/// Test ceilings outside the accepted range.
#[test]
fn test_out_of_range_ceiling() {
    assert_eq!(nearest_previous_prime(0), None);
    assert_eq!(nearest_previous_prime(46341), None);
    assert_eq!(nearest_previous_prime(u32::MAX), None);
}

/// Test that 1 is never reported as prime.
#[test]
fn test_ceiling_one_has_no_prime() {
    assert_eq!(nearest_previous_prime(1), None);
}

/// Test sieve construction errors.
#[test]
fn test_sieve_new_errors() {
    assert_eq!(
        Sieve::new(0),
        Err(SeqError::CeilingOutOfRange {
            got: 0,
            max: MAX_SIEVE_CEILING
        })
    );
    assert_eq!(
        Sieve::new(50_000).unwrap_err().to_string(),
        "Invalid sieve ceiling: 50000 (must be in [1, 46340])"
    );
}

// ============================================================================
// Sieve Queries Tests
// ============================================================================

/// Test primality queries.
#[test]
fn test_is_prime() {
    let sieve = Sieve::new(30).unwrap();
    assert_eq!(sieve.ceiling(), 30);
    assert!(!sieve.is_prime(0));
    assert!(!sieve.is_prime(1));
    assert!(sieve.is_prime(2));
    assert!(sieve.is_prime(29));
    assert!(!sieve.is_prime(27));
    assert!(!sieve.is_prime(31), "above the ceiling");
}

/// Test prime enumeration.
#[test]
fn test_primes_ascending() {
    let sieve = Sieve::new(30).unwrap();
    let primes: Vec<u32> = sieve.primes().collect();
    assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
}

/// Test prime count at the upper bound.
///
/// Verifies: pi(46340) = 4792.
#[test]
fn test_prime_count_at_bound() {
    let sieve = Sieve::new(MAX_SIEVE_CEILING).unwrap();
    assert_eq!(sieve.primes().count(), 4792);
}

/// Test largest on the smallest ceiling.
#[test]
fn test_largest_on_ceiling_one() {
    let sieve = Sieve::new(1).unwrap();
    assert_eq!(sieve.largest(), None);
    assert_eq!(sieve.primes().count(), 0);
}
