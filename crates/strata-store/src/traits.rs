//! Core trait definition for document storage
//!
//! [`DocumentStore`] is the seam between the resolution engine and the
//! durable medium. Implementations must guarantee:
//!
//! - `append` computes and stamps the next version atomically with the
//!   insertion (one write-lock acquisition around scan-compute-append)
//! - mutations are persisted before the call returns, so a read performed
//!   afterwards observes the write
//! - reads see a consistent snapshot, never a partially applied mutation

use async_trait::async_trait;
use std::collections::BTreeSet;
use strata_core::{ConfigDocument, DocumentDraft};

use crate::StoreResult;

/// Append-only collection of versioned configuration documents
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document version.
    ///
    /// Assigns `version = 1 + max(version over documents with the same
    /// tenant/env/componentKey/scopeType/scopeKey, default 0)` and stamps
    /// the creation time, then persists. Returns the stored document.
    async fn append(&self, draft: DocumentDraft) -> StoreResult<ConfigDocument>;

    /// All documents for an identity triple, in no particular order.
    async fn scan(
        &self,
        tenant: &str,
        env: &str,
        component_key: &str,
    ) -> StoreResult<Vec<ConfigDocument>>;

    /// Every component key with at least one document under tenant/env.
    async fn component_keys(&self, tenant: &str, env: &str) -> StoreResult<BTreeSet<String>>;

    /// Remove every document. Returns the number removed.
    async fn remove_all(&self) -> StoreResult<usize>;

    /// Remove every document for an identity triple. Returns the number
    /// removed.
    async fn remove_where(
        &self,
        tenant: &str,
        env: &str,
        component_key: &str,
    ) -> StoreResult<usize>;
}
