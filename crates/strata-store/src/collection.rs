//! Pure helpers over the in-memory document collection
//!
//! Both store backends keep a plain `Vec<ConfigDocument>` behind a lock;
//! these functions implement the queries the trait exposes. They take the
//! collection by reference so callers decide the locking.

use std::collections::BTreeSet;
use strata_core::{ConfigDocument, DocumentDraft};

/// Next version for the draft's identity+scope: one past the current
/// maximum, or 1 for a scope with no documents.
pub(crate) fn next_version(documents: &[ConfigDocument], draft: &DocumentDraft) -> u64 {
    documents
        .iter()
        .filter(|doc| doc.same_scope_as(draft))
        .map(|doc| doc.version)
        .max()
        .unwrap_or(0)
        + 1
}

/// All documents for the identity triple, cloned out of the collection.
pub(crate) fn scan(
    documents: &[ConfigDocument],
    tenant: &str,
    env: &str,
    component_key: &str,
) -> Vec<ConfigDocument> {
    documents
        .iter()
        .filter(|doc| doc.matches_identity(tenant, env, component_key))
        .cloned()
        .collect()
}

/// Every component key with at least one document under tenant/env.
pub(crate) fn component_keys(
    documents: &[ConfigDocument],
    tenant: &str,
    env: &str,
) -> BTreeSet<String> {
    documents
        .iter()
        .filter(|doc| doc.tenant == tenant && doc.env == env)
        .map(|doc| doc.component_key.clone())
        .collect()
}

/// Documents that survive a `remove_where` for the identity triple.
pub(crate) fn retain_other_identities(
    documents: &[ConfigDocument],
    tenant: &str,
    env: &str,
    component_key: &str,
) -> Vec<ConfigDocument> {
    documents
        .iter()
        .filter(|doc| !doc.matches_identity(tenant, env, component_key))
        .cloned()
        .collect()
}
