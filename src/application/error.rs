//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Session errors report rejected intents. The owned (tree, clipboard)
/// pair is left unchanged whenever one of these is returned.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("attempted to paste without cutting or copying first")]
    EmptyClipboard,

    #[error("paste target not found in tree: {0}")]
    TargetNotFound(String),

    #[error("operation requires a parent, but {0} is the tree root")]
    RootTarget(String),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for session layer operations.
pub type SessionResult<T> = Result<T, SessionError>;
