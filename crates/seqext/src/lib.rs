//! # seqext: Generic Sequence Helpers for Rust
//!
//! Small, pure helper functions that extend iteration over collections:
//!
//! - index of the first maximum / minimum element,
//! - population and sample standard deviation,
//! - the mode (most common element),
//! - distinct counts and unique sets,
//! - the largest prime not exceeding a bounded ceiling.
//!
//! Every operation is stateless and side-effect free.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqext::prelude::*;
//!
//! let scores = vec![4, 9, 1, 9, 1];
//!
//! assert_eq!(scores.iter().max_index(), Some(1)); // first of the two 9s
//! assert_eq!(scores.iter().min_index(), Some(2));
//! assert_eq!(scores.iter().distinct_count(), 3);
//!
//! let samples = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! assert!((samples.std_dev_sample() - 1.5811388).abs() < 1e-6);
//!
//! assert_eq!(nearest_previous_prime(10), Some(7));
//! ```
//!
//! ## Result and Error Handling
//!
//! Failure is signalled three ways, depending on the operation:
//!
//! - **`None`**: empty input to index search or mode, or a sieve ceiling
//!   outside `[1, MAX_SIEVE_CEILING]`.
//! - **NaN**: the unchecked statistics follow IEEE-754 for undefined results
//!   (mean of nothing, sample deviation of a single value).
//! - **`Err(SeqError)`**: the checked `try_*` statistics and [`Sieve::new`]
//!   report what went wrong.
//!
//! ```rust
//! use seqext::prelude::*;
//!
//! let single = [3.0_f64];
//! assert!(single.std_dev_sample().is_nan());
//!
//! match single.try_std_dev_sample() {
//!     Ok(sd) => println!("sd = {sd}"),
//!     Err(e) => eprintln!("cannot compute: {e}"),
//! }
//! # assert_eq!(single.try_std_dev_sample(), Err(SeqError::TooFewPoints { got: 1, min: 2 }));
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! seqext = { version = "0.1", default-features = false }
//! ```
//!
//! Index search, dispersion statistics and the sieve remain available. The
//! hash-based operations (`to_unique_set`, `distinct_count`, `frequencies`,
//! `most_common`) require `std`.
//!
//! [`Sieve::new`]: crate::prelude::Sieve::new

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error type and validation.
mod primitives;

// Layer 2: Math - dispersion statistics and prime sieve.
mod math;

// Layer 3: Algorithms - extremum search and frequency analysis.
mod algorithms;

// Extension-trait API.
mod api;

// Standard seqext prelude.
pub mod prelude {
    pub use crate::api::{
        MAX_SIEVE_CEILING, SeqError, SequenceExt, Sieve, StatsExt, nearest_previous_prime,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
