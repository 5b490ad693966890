//! Model error types.

use thiserror::Error;

/// Errors that can occur while building a program index.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Duplicate type declaration name.
    #[error("Duplicate type declaration: {0}")]
    DuplicateTypeName(String),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
