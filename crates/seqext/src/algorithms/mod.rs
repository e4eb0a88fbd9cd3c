//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the sequence-generic algorithms:
//! - Extremal-index search (first max/min position)
//! - Frequency analysis (unique set, distinct count, mode)
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// First-occurrence max/min index search.
pub mod extremum;

/// Hash-based grouping of equal elements.
#[cfg(feature = "std")]
pub mod frequency;
