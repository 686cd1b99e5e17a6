//! Domain-level errors (no external dependencies)

use std::io;
use thiserror::Error;

/// Domain errors represent violations of the component tree's contracts.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("output sink failed: {0}")]
    Sink(#[from] io::Error),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
