//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violated engine preconditions.
/// Structural operations themselves are total and never fail.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("duplicate uuid in tree: {0}")]
    DuplicateUuid(String),
}

/// Result type for domain layer operations.
pub type DomainResult<T> = Result<T, DomainError>;
