//! Bounded sieve of Eratosthenes.
//!
//! ## Purpose
//!
//! This module finds the largest prime not exceeding a ceiling, and exposes
//! the underlying sieve for repeated primality queries.
//!
//! ## Design notes
//!
//! * **Explicit markers**: One `bool` per integer in `[0, ceiling]`, `true`
//!   meaning struck (composite). Values are never stored in the table.
//! * **Bounded**: The ceiling is capped at [`MAX_SIEVE_CEILING`] so that
//!   `i * i` stays within `i32` range.
//! * **Strict primes**: 0 and 1 are never reported as prime.
//!
//! ## Invariants
//!
//! * `composite.len() == ceiling + 1`.
//! * `is_prime(n)` is true iff `2 <= n <= ceiling` and `n` is unmarked.
//!
//! ## Non-goals
//!
//! * This module does not provide segmented or wheel-factorised sieves.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SeqError;
use crate::primitives::validator::Validator;

// ============================================================================
// Constants
// ============================================================================

/// Largest accepted sieve ceiling: `floor(sqrt(i32::MAX))`.
pub const MAX_SIEVE_CEILING: u32 = 46_340;

// ============================================================================
// Sieve
// ============================================================================

/// Primality table for every integer in `[0, ceiling]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sieve {
    composite: Vec<bool>,
}

impl Sieve {
    /// Build the sieve for `[0, ceiling]`.
    ///
    /// Fails with [`SeqError::CeilingOutOfRange`] unless
    /// `1 <= ceiling <= MAX_SIEVE_CEILING`.
    pub fn new(ceiling: u32) -> Result<Self, SeqError> {
        Validator::validate_ceiling(ceiling, MAX_SIEVE_CEILING)?;

        let n = ceiling as usize;
        let mut composite = vec![false; n + 1];

        let mut i = 2usize;
        while i * i <= n {
            if !composite[i] {
                let mut k = i * i;
                while k <= n {
                    composite[k] = true;
                    k += i;
                }
            }
            i += 1;
        }

        Ok(Self { composite })
    }

    /// Upper bound of the sieved range.
    #[inline]
    pub fn ceiling(&self) -> u32 {
        // Bounded by MAX_SIEVE_CEILING at construction.
        (self.composite.len() - 1) as u32
    }

    /// Whether `n` is prime. False for any `n` above the ceiling.
    #[inline]
    pub fn is_prime(&self, n: u32) -> bool {
        n >= 2
            && self
                .composite
                .get(n as usize)
                .is_some_and(|struck| !struck)
    }

    /// All primes in `[2, ceiling]`, ascending.
    pub fn primes(&self) -> impl Iterator<Item = u32> + '_ {
        (2..=self.ceiling()).filter(move |&n| self.is_prime(n))
    }

    /// Largest prime in `[2, ceiling]`, scanning downward.
    pub fn largest(&self) -> Option<u32> {
        (2..=self.ceiling()).rev().find(|&n| self.is_prime(n))
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Largest prime `<= ceiling`.
///
/// Returns `None` when `ceiling` is 0, exceeds [`MAX_SIEVE_CEILING`], or is 1
/// (no prime exists in `[0, 1]`).
pub fn nearest_previous_prime(ceiling: u32) -> Option<u32> {
    Sieve::new(ceiling).ok()?.largest()
}
