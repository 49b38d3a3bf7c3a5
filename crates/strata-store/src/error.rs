//! Error types for the store layer

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error while persisting or loading the collection
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The collection could not be serialized for persistence
    #[error("Failed to serialize store contents: {0}")]
    Serialize(serde_json::Error),

    /// The persisted file does not parse as a document collection
    #[error("Store file is corrupt: {path}: {source}")]
    Corrupt {
        path: String,
        source: serde_json::Error,
    },
}
