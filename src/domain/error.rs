//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the namespace tree's rules.
/// These are independent of parsing and I/O concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid input: empty path")]
    InvalidPath,

    /// A path walk stopped at this segment.
    #[error("{0} does not exist")]
    PathNotFound(String),

    /// The parent resolved but the named child itself is absent.
    #[error("{0} does not exist")]
    NodeNotFound(String),

    #[error("{0} already exists")]
    NameCollision(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
