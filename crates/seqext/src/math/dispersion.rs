//! Dispersion statistics: mean, variance and standard deviation.
//!
//! ## Purpose
//!
//! This module computes the population and sample standard deviation of a
//! slice of floating-point values, together with the mean and variance they
//! are built from.
//!
//! ## Design notes
//!
//! * **Two-pass**: The mean is computed first, then the sum of squared
//!   deviations from it. Inputs are slices so both passes see the same data.
//! * **IEEE-754 domain errors**: Undefined results are NaN, never a
//!   misleading finite number. An empty slice has a NaN mean; the sample
//!   variants are NaN for fewer than two values (0 / 0).
//! * **Checked variants**: `try_*` functions validate first and report a
//!   [`SeqError`] instead of returning NaN.
//!
//! ## Key concepts
//!
//! | Statistic  | Divisor | Formula                      |
//! |------------|---------|------------------------------|
//! | Population | n       | sqrt(sum((x_i - mu)^2) / n)  |
//! | Sample     | n - 1   | sqrt(sum((x_i - mu)^2) / (n - 1)) |
//!
//! ## Non-goals
//!
//! * This module does not use compensated (Kahan) or online (Welford) summation.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SeqError;
use crate::primitives::validator::Validator;

// ============================================================================
// Central Tendency
// ============================================================================

/// Arithmetic mean of `values`. NaN for an empty slice.
#[inline]
pub fn mean<T: Float>(values: &[T]) -> T {
    let mut sum = T::zero();
    for &v in values {
        sum = sum + v;
    }
    sum / count_as::<T>(values.len())
}

// ============================================================================
// Variance
// ============================================================================

/// Population variance (divisor `n`). NaN for an empty slice.
#[inline]
pub fn variance_population<T: Float>(values: &[T]) -> T {
    let mu = mean(values);
    sum_squared_deviations(values, mu) / count_as::<T>(values.len())
}

/// Sample variance with Bessel's correction (divisor `n - 1`).
///
/// NaN when `values.len() <= 1`.
#[inline]
pub fn variance_sample<T: Float>(values: &[T]) -> T {
    let mu = mean(values);
    // Saturating keeps the empty case at 0 / 0 rather than 0 / -1.
    let dof = values.len().saturating_sub(1);
    sum_squared_deviations(values, mu) / count_as::<T>(dof)
}

// ============================================================================
// Standard Deviation
// ============================================================================

/// Population standard deviation: `sqrt(sum((x - mean)^2) / n)`.
///
/// Returns NaN for an empty slice.
#[inline]
pub fn std_dev_population<T: Float>(values: &[T]) -> T {
    variance_population(values).sqrt()
}

/// Sample standard deviation: `sqrt(sum((x - mean)^2) / (n - 1))`.
///
/// Returns NaN when fewer than two values are given.
#[inline]
pub fn std_dev_sample<T: Float>(values: &[T]) -> T {
    variance_sample(values).sqrt()
}

/// Checked population standard deviation.
///
/// Fails with [`SeqError::EmptyInput`] for an empty slice and
/// [`SeqError::InvalidNumericValue`] if any value is NaN or infinite.
pub fn try_std_dev_population<T: Float>(values: &[T]) -> Result<T, SeqError> {
    Validator::validate_values(values, 1)?;
    Ok(std_dev_population(values))
}

/// Checked sample standard deviation.
///
/// Fails with [`SeqError::TooFewPoints`] when fewer than two values are
/// given, otherwise as [`try_std_dev_population`].
pub fn try_std_dev_sample<T: Float>(values: &[T]) -> Result<T, SeqError> {
    Validator::validate_values(values, 2)?;
    Ok(std_dev_sample(values))
}

// ============================================================================
// Helpers
// ============================================================================

#[inline]
fn sum_squared_deviations<T: Float>(values: &[T], mu: T) -> T {
    let mut acc = T::zero();
    for &v in values {
        let d = v - mu;
        acc = acc + d * d;
    }
    acc
}

#[inline]
fn count_as<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}
