//! Builder for ConfigEngine

use std::path::PathBuf;
use std::sync::Arc;

use strata_core::{ComponentRegistry, Validator};
use strata_store::{DocumentStore, MemoryStore};

use crate::engine::ConfigEngine;
use crate::error::Result;
use crate::registry_loader;

/// Builds a [`ConfigEngine`] from a registry source and a store.
///
/// Defaults: an empty registry and an in-memory store, which is enough
/// for tests and throwaway environments.
#[derive(Default)]
pub struct ConfigEngineBuilder {
    registry: Option<ComponentRegistry>,
    registry_path: Option<PathBuf>,
    store: Option<Arc<dyn DocumentStore>>,
    deny_unknown_fields: bool,
}

impl ConfigEngineBuilder {
    /// Create a builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already-constructed registry
    pub fn with_registry(mut self, registry: ComponentRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Load the registry from a JSON file at build time; a missing file
    /// yields an empty registry
    pub fn with_registry_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.registry_path = Some(path.into());
        self
    }

    /// Use the given document store
    pub fn with_store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Reject submissions containing fields their schema does not declare
    pub fn deny_unknown_fields(mut self) -> Self {
        self.deny_unknown_fields = true;
        self
    }

    /// Build the engine
    pub async fn build(self) -> Result<ConfigEngine> {
        let registry = match (self.registry, self.registry_path) {
            (Some(registry), _) => registry,
            (None, Some(path)) => registry_loader::load_registry(&path).await?,
            (None, None) => ComponentRegistry::new(),
        };

        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryStore::new()) as Arc<dyn DocumentStore>);

        let mut validator = Validator::new();
        if self.deny_unknown_fields {
            validator = validator.deny_unknown_fields();
        }

        Ok(ConfigEngine::new(registry, store).with_validator(validator))
    }
}
