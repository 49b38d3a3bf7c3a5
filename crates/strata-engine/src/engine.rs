//! Core ConfigEngine implementation
//!
//! Resolution combines four pieces: the registry default as the baseline,
//! a latest-per-scope reduction of the stored documents, scope matching
//! against the request context, and specificity-ordered deep merging in
//! the fixed macro-order Global -> Page -> Route. Route always has final
//! say; Global never overrides anything.

use std::collections::{hash_map::Entry, BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use strata_core::{deep_merge, ComponentRegistry, ConfigDocument, ScopeType, Validator, Value};
use strata_store::DocumentStore;

use crate::error::{EngineError, Result};
use crate::scope;
use crate::specificity;
use crate::types::{ResolveContext, UpsertRequest};

/// Resolution engine over a registry and a document store
pub struct ConfigEngine {
    registry: Arc<ComponentRegistry>,
    store: Arc<dyn DocumentStore>,
    validator: Validator,
}

impl ConfigEngine {
    /// Create an engine with the default validator settings
    pub fn new(registry: ComponentRegistry, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            registry: Arc::new(registry),
            store,
            validator: Validator::new(),
        }
    }

    /// Start building an engine
    pub fn builder() -> crate::builder::ConfigEngineBuilder {
        crate::builder::ConfigEngineBuilder::new()
    }

    pub(crate) fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// The component registry this engine resolves against
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Effective configuration for one component under the given context.
    ///
    /// Total over its inputs: unknown components with no documents
    /// resolve to an empty object rather than erroring.
    pub async fn resolve(
        &self,
        tenant: &str,
        env: &str,
        component_key: &str,
        ctx: &ResolveContext,
    ) -> Result<Value> {
        let mut effective = self.registry.default_for(component_key);

        let documents = self.store.scan(tenant, env, component_key).await?;
        let latest = latest_per_scope(documents);

        let mut globals = Vec::new();
        let mut pages = Vec::new();
        let mut routes = Vec::new();
        for document in latest {
            match document.scope_type {
                ScopeType::Global => globals.push(document),
                ScopeType::Page => {
                    if let Some(page_id) = ctx.page.as_deref() {
                        if scope::matches_page(&document, page_id) {
                            pages.push(document);
                        }
                    }
                }
                ScopeType::Route => {
                    if let Some(route_path) = ctx.route.as_deref() {
                        if scope::matches_route(&document, route_path) {
                            routes.push(document);
                        }
                    }
                }
            }
        }

        tracing::debug!(
            component = component_key,
            globals = globals.len(),
            pages = pages.len(),
            routes = routes.len(),
            "resolving effective configuration"
        );

        // Fixed macro-order; never interleaved, never reordered
        for subset in [&mut globals, &mut pages, &mut routes] {
            specificity::rank(subset);
            for document in subset.iter() {
                effective = deep_merge(Some(&effective), &document.value);
            }
        }

        Ok(effective)
    }

    /// Effective configuration for every known component: the union of
    /// registry keys and stored keys for the tenant/env, in lexicographic
    /// order.
    pub async fn resolve_all(
        &self,
        tenant: &str,
        env: &str,
        ctx: &ResolveContext,
    ) -> Result<BTreeMap<String, Value>> {
        let mut keys: BTreeSet<String> = self
            .registry
            .component_keys()
            .map(str::to_string)
            .collect();
        keys.extend(self.store.component_keys(tenant, env).await?);

        let mut effective = BTreeMap::new();
        for key in keys {
            let value = self.resolve(tenant, env, &key, ctx).await?;
            effective.insert(key, value);
        }
        Ok(effective)
    }

    /// Full version history for a component: every stored document, all
    /// scopes, ordered by (scopeType, scopeKey, version) ascending.
    pub async fn history(
        &self,
        tenant: &str,
        env: &str,
        component_key: &str,
    ) -> Result<Vec<ConfigDocument>> {
        let mut documents = self.store.scan(tenant, env, component_key).await?;
        documents.sort_by(|a, b| {
            (a.scope_type, &a.scope_key, a.version).cmp(&(b.scope_type, &b.scope_key, b.version))
        });
        Ok(documents)
    }

    /// Validate and store a new document version, returning the assigned
    /// version number. On validation failure nothing is written and the
    /// effective configuration is left exactly as it was.
    pub async fn upsert(&self, request: UpsertRequest) -> Result<u64> {
        if let Some(schema) = self.registry.schema_for(&request.component_key) {
            if let Err(violations) = self.validator.validate(&request.value, schema) {
                tracing::info!(
                    component = %request.component_key,
                    violations = violations.len(),
                    "rejected document submission"
                );
                return Err(EngineError::Validation {
                    component_key: request.component_key,
                    violations,
                });
            }
        }

        let document = self.store.append(request.into_draft()).await?;
        tracing::info!(
            component = %document.component_key,
            scope = %document.scope_type.as_str(),
            scope_key = %document.scope_key,
            version = document.version,
            "stored document version"
        );
        Ok(document.version)
    }

    /// Remove every document in the store. Returns the number removed.
    pub async fn delete_all(&self) -> Result<usize> {
        let removed = self.store.remove_all().await?;
        tracing::info!(removed, "cleared document store");
        Ok(removed)
    }

    /// Remove every document for one component under tenant/env. Returns
    /// the number removed.
    pub async fn delete_component(
        &self,
        tenant: &str,
        env: &str,
        component_key: &str,
    ) -> Result<usize> {
        let removed = self.store.remove_where(tenant, env, component_key).await?;
        tracing::info!(component = component_key, removed, "deleted component documents");
        Ok(removed)
    }
}

/// Collapse a scan result to the newest version per (scopeType, scopeKey).
///
/// Version ties cannot occur while the store's append invariant holds;
/// if one ever did, the document observed last wins.
fn latest_per_scope(documents: Vec<ConfigDocument>) -> Vec<ConfigDocument> {
    let mut latest: HashMap<(ScopeType, String), ConfigDocument> = HashMap::new();
    for document in documents {
        let key = (document.scope_type, document.scope_key.clone());
        match latest.entry(key) {
            Entry::Occupied(mut slot) => {
                if document.version >= slot.get().version {
                    slot.insert(document);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(document);
            }
        }
    }
    latest.into_values().collect()
}
