//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numeric functions:
//! - Dispersion statistics (mean, variance, standard deviation)
//! - A bounded prime sieve
//!
//! These are independent building blocks with no sequence-generic logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Population and sample dispersion statistics.
pub mod dispersion;

/// Sieve of Eratosthenes with a bounded ceiling.
pub mod sieve;
