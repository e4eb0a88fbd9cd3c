//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type and input validation shared by the
//! checked operations. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Fail-fast input validation.
pub mod validator;
