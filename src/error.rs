//! Error type for the terminal operations that can fail.

use thiserror::Error;

/// Errors raised by [`FluentList`](crate::FluentList) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FluentError {
    /// A reduction without a seed was asked of an empty list.
    #[error("empty list can't be reduced ({op})")]
    EmptyReduce {
        /// The operation that was attempted, e.g. `"reduce"` or `"min_by"`.
        op: &'static str,
    },
}

/// Result alias used across the crate.
pub type Result<T, E = FluentError> = std::result::Result<T, E>;
