//! Configuration documents and scope types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value::Value;

/// The audience a configuration document applies to.
///
/// The derived ordering (`Global < Page < Route`) is the fixed macro-merge
/// order of the resolution engine and the scope-type sort order of
/// document history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeType {
    /// Applies to every request; scope key is `*`
    Global,
    /// Applies when the page id matches the scope key exactly
    Page,
    /// Applies when the route path matches the glob pattern in the scope key
    Route,
}

impl ScopeType {
    /// Wire name, as stored in persisted documents
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeType::Global => "global",
            ScopeType::Page => "page",
            ScopeType::Route => "route",
        }
    }
}

/// A versioned configuration document, immutable once stored.
///
/// Field names follow the persisted JSON representation and must stay
/// stable across versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    /// Tenant key
    pub tenant: String,

    /// Environment key
    pub env: String,

    /// Component this document configures
    pub component_key: String,

    /// Matching semantics for this document
    pub scope_type: ScopeType,

    /// `*` for global, exact page id for page, glob pattern for route
    pub scope_key: String,

    /// Monotonically increasing per (tenant, env, componentKey, scopeType,
    /// scopeKey), starting at 1; assigned by the store
    pub version: u64,

    /// Partial configuration payload
    pub value: Value,

    /// Provenance, not used in resolution
    pub created_at: DateTime<Utc>,

    /// Provenance, not used in resolution
    pub created_by: String,
}

impl ConfigDocument {
    /// Whether this document belongs to the given identity triple
    pub fn matches_identity(&self, tenant: &str, env: &str, component_key: &str) -> bool {
        self.tenant == tenant && self.env == env && self.component_key == component_key
    }

    /// Whether this document shares identity AND scope with the draft
    pub fn same_scope_as(&self, draft: &DocumentDraft) -> bool {
        self.matches_identity(&draft.tenant, &draft.env, &draft.component_key)
            && self.scope_type == draft.scope_type
            && self.scope_key == draft.scope_key
    }
}

/// A document submission before the store assigns `version` and
/// `createdAt`.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentDraft {
    pub tenant: String,
    pub env: String,
    pub component_key: String,
    pub scope_type: ScopeType,
    pub scope_key: String,
    pub value: Value,
    pub created_by: String,
}

impl DocumentDraft {
    /// Finalize the draft into a stored document
    pub fn into_document(self, version: u64, created_at: DateTime<Utc>) -> ConfigDocument {
        ConfigDocument {
            tenant: self.tenant,
            env: self.env,
            component_key: self.component_key,
            scope_type: self.scope_type,
            scope_key: self.scope_key,
            version,
            value: self.value,
            created_at,
            created_by: self.created_by,
        }
    }
}
