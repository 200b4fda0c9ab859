//! Unified error types for the BZ column-generation pipeline.
//!
//! This module provides a common error type [`BzError`] that can represent
//! errors from any part of the system. Domain-specific error types (pricing,
//! master-problem, I/O) convert into `BzError` for uniform handling at API
//! boundaries.
//!
//! # Example
//!
//! ```ignore
//! use bz_core::{BzError, BzResult};
//!
//! fn run_iteration() -> BzResult<()> {
//!     price_column()?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Unified error type for all BZ column-generation operations.
#[derive(Error, Debug)]
pub enum BzError {
    /// Malformed or out-of-range input (bad block id, cyclic DAG, NaN profit).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The LP backend reported a non-optimal status (infeasible, unbounded, numerical failure).
    #[error("solver error: {0}")]
    Solver(String),

    /// The min-cut engine reported an invalid partition or a capacity overflow.
    #[error("pricing error: {0}")]
    Pricing(String),

    /// An iteration callback failed; always non-fatal, logged at the call site.
    #[error("callback error: {0}")]
    Callback(String),

    /// I/O errors from collaborator file parsers or result writers.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors (for wrapping external errors).
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using [`BzError`].
pub type BzResult<T> = Result<T, BzError>;

impl From<String> for BzError {
    fn from(s: String) -> Self {
        BzError::Other(s)
    }
}

impl From<&str> for BzError {
    fn from(s: &str) -> Self {
        BzError::Other(s.to_string())
    }
}
