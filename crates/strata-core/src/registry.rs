//! Component registry: per-component defaults and validation contracts
//!
//! The registry is loaded once at process start and read-only afterwards.
//! Lookups never fail: components absent from the registry degrade to an
//! empty-object default and no schema, so writes stay possible for
//! components that were never registered in advance.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{CoreError, Result};
use crate::types::{Schema, Value};

/// Registry declaration for one component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Baseline value resolution starts from; empty object when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Validation contract for submitted values; no schema means any
    /// value is accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl RegistryEntry {
    /// Entry with a default value only
    pub fn with_default(default: Value) -> Self {
        Self {
            default: Some(default),
            schema: None,
        }
    }

    /// Entry with a schema only
    pub fn with_schema(schema: Schema) -> Self {
        Self {
            default: None,
            schema: Some(schema),
        }
    }

    /// Set the schema
    pub fn and_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// Static lookup of component key to registry entry
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, RegistryEntry>,
}

/// On-disk registry shape: `{"components": {key: {default?, schema?}}}`
#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    components: HashMap<String, RegistryEntry>,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component entry (construction and tests)
    pub fn with_component(mut self, key: impl Into<String>, entry: RegistryEntry) -> Self {
        self.components.insert(key.into(), entry);
        self
    }

    /// Parse a registry document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: RegistryFile = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidRegistry(e.to_string()))?;
        Ok(Self {
            components: file.components,
        })
    }

    /// Baseline value for a component: a copy of the declared default, or
    /// an empty object when the component or its default is absent.
    pub fn default_for(&self, component_key: &str) -> Value {
        self.components
            .get(component_key)
            .and_then(|entry| entry.default.clone())
            .unwrap_or_else(Value::empty_object)
    }

    /// Validation contract for a component, if one was declared
    pub fn schema_for(&self, component_key: &str) -> Option<&Schema> {
        self.components
            .get(component_key)
            .and_then(|entry| entry.schema.as_ref())
    }

    /// Every registered component key
    pub fn component_keys(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Number of registered components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
