//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they re-surface core failures (the route loaders do this).

use thiserror::Error;

/// The top-level error type for `vtrack-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// Shorthand result type for `vtrack-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
