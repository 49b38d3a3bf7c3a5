//! Request types for the resolution engine

use strata_core::{DocumentDraft, ScopeType, Value};

/// Tenant used when the caller does not name one
pub const DEFAULT_TENANT: &str = "default";

/// Environment used when the caller does not name one
pub const DEFAULT_ENV: &str = "dev";

/// UI context a resolution runs against: the current route path and/or
/// page id. Either may be absent; absent context simply deactivates the
/// corresponding scope layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveContext {
    /// Current URL path, matched against route-scope glob patterns
    pub route: Option<String>,
    /// Current page id, matched exactly against page-scope keys
    pub page: Option<String>,
}

impl ResolveContext {
    /// Context with neither route nor page
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the route path
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Set the page id
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }
}

/// A new document submission.
///
/// Defaults mirror what the transport layer falls back to when the
/// caller omits a field: tenant `default`, env `dev`, a global `*` scope,
/// and `dev` provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertRequest {
    pub component_key: String,
    pub tenant: String,
    pub env: String,
    pub scope_type: ScopeType,
    pub scope_key: String,
    pub value: Value,
    pub created_by: String,
}

impl UpsertRequest {
    /// Global-scope submission for the default tenant/env
    pub fn new(component_key: impl Into<String>, value: Value) -> Self {
        Self {
            component_key: component_key.into(),
            tenant: DEFAULT_TENANT.to_string(),
            env: DEFAULT_ENV.to_string(),
            scope_type: ScopeType::Global,
            scope_key: "*".to_string(),
            value,
            created_by: "dev".to_string(),
        }
    }

    /// Set tenant
    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = tenant.into();
        self
    }

    /// Set environment
    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = env.into();
        self
    }

    /// Target a page scope
    pub fn page_scope(mut self, page_id: impl Into<String>) -> Self {
        self.scope_type = ScopeType::Page;
        self.scope_key = page_id.into();
        self
    }

    /// Target a route scope
    pub fn route_scope(mut self, pattern: impl Into<String>) -> Self {
        self.scope_type = ScopeType::Route;
        self.scope_key = pattern.into();
        self
    }

    /// Set provenance
    pub fn created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }

    pub(crate) fn into_draft(self) -> DocumentDraft {
        DocumentDraft {
            tenant: self.tenant,
            env: self.env,
            component_key: self.component_key,
            scope_type: self.scope_type,
            scope_key: self.scope_key,
            value: self.value,
            created_by: self.created_by,
        }
    }
}
