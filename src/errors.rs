// Copyright 2025 Cowboy AI, LLC.

//! Error types for shape operations

use thiserror::Error;

/// Errors that can occur while building or rendering shapes
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// Key already present in the source mapping
    #[error("duplicate key in source mapping: {key}")]
    DuplicateKey {
        /// The key that was added twice
        key: String,
    },

    /// Source mapping keys must be non-empty
    #[error("source mapping keys must be non-empty")]
    EmptyKey,

    /// Schema serialization error
    #[error("schema serialization error: {0}")]
    Schema(String),
}

/// Result type for shape operations
pub type ShapeResult<T> = Result<T, ShapeError>;

impl From<serde_json::Error> for ShapeError {
    fn from(err: serde_json::Error) -> Self {
        ShapeError::Schema(err.to_string())
    }
}
