use thiserror::Error;

/// Domain guard error types
#[derive(Error, Debug)]
pub enum GuardError {
    /// Canonicalization precondition: the raw name must be non-empty.
    /// Not recovered internally; an empty name is a caller-input bug.
    #[error("Domain name must not be empty")]
    EmptyDomain,

    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type Result<T> = std::result::Result<T, GuardError>;
