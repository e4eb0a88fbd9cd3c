//! Input validation for checked sequence operations.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Numeric validation is generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not compute any statistic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SeqError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for checked operations.
///
/// All methods return `Result<(), SeqError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate a numeric sample: at least `min` elements, all finite.
    pub fn validate_values<T: Float>(values: &[T], min: usize) -> Result<(), SeqError> {
        // Check 1: Non-empty
        if values.is_empty() {
            return Err(SeqError::EmptyInput);
        }

        // Check 2: Sufficient points
        let n = values.len();
        if n < min {
            return Err(SeqError::TooFewPoints { got: n, min });
        }

        // Check 3: All values finite
        for (i, v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(SeqError::InvalidNumericValue(format!(
                    "values[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a sieve ceiling against `[1, max]`.
    pub fn validate_ceiling(ceiling: u32, max: u32) -> Result<(), SeqError> {
        if ceiling < 1 || ceiling > max {
            return Err(SeqError::CeilingOutOfRange { got: ceiling, max });
        }
        Ok(())
    }
}
