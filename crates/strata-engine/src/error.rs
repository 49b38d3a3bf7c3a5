//! Engine error types

use strata_core::types::Violation;
use thiserror::Error;

/// Engine error type
#[derive(Error, Debug)]
pub enum EngineError {
    /// A submitted value failed its component's schema; carries every
    /// violation, ordered by path. Nothing was written to the store.
    #[error("Validation failed for component '{component_key}': {count} violation(s)", count = .violations.len())]
    Validation {
        component_key: String,
        violations: Vec<Violation>,
    },

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] strata_store::StoreError),

    /// Registry error
    #[error("Registry error: {0}")]
    Registry(#[from] strata_core::CoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
