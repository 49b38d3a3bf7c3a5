//! Strata Core - Core types for the Strata configuration engine
//!
//! This crate provides the fundamental types used across the Strata
//! workspace:
//! - `Value` for dynamic configuration payloads
//! - Deep-merge semantics for layered configuration
//! - `ConfigDocument` and scope types
//! - Schema definitions and the value validator
//! - The component registry (defaults + optional schemas)

pub mod error;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use registry::{ComponentRegistry, RegistryEntry};
pub use types::{
    deep_merge, ConfigDocument, DocumentDraft, FieldType, Schema, SchemaField, ScopeType,
    Validator, Value, Violation,
};
