//! Strata Engine - layered configuration resolution
//!
//! Computes the effective configuration for components by merging
//! versioned, scoped documents over registry defaults: Global documents
//! first, then Page documents matching the request's page id, then Route
//! documents matching the request's route path, most specific last.

pub mod builder;
pub mod engine;
pub mod error;
pub mod registry_loader;
pub mod scope;
pub mod specificity;
pub mod types;

// Re-export main types
pub use builder::ConfigEngineBuilder;
pub use engine::ConfigEngine;
pub use error::{EngineError, Result};
pub use types::{ResolveContext, UpsertRequest, DEFAULT_ENV, DEFAULT_TENANT};

// Re-export commonly used types from dependencies
pub use strata_core::{ComponentRegistry, ConfigDocument, RegistryEntry, ScopeType, Value};
pub use strata_store::{DocumentStore, JsonFileStore, MemoryStore};
