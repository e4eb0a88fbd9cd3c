//! Error types for checked sequence operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported by the checked
//! operations of the crate (`try_*` statistics and [`Sieve::new`]).
//! The unchecked operations never produce these errors; they signal failure
//! through `None` or a non-finite floating-point result instead.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. required counts).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//!
//! [`Sieve::new`]: crate::prelude::Sieve::new

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for checked sequence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// The input sequence holds no elements.
    EmptyInput,

    /// The input sequence is shorter than the operation requires.
    TooFewPoints {
        /// Number of elements provided.
        got: usize,
        /// Minimum number of elements required.
        min: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Sieve ceiling lies outside `[1, MAX_SIEVE_CEILING]`.
    CeilingOutOfRange {
        /// The ceiling provided.
        got: u32,
        /// Largest accepted ceiling.
        max: u32,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SeqError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::CeilingOutOfRange { got, max } => {
                write!(f, "Invalid sieve ceiling: {got} (must be in [1, {max}])")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SeqError {}
