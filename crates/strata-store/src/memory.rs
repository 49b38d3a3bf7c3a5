//! In-memory document store
//!
//! Keeps the collection in memory only. Suitable for tests and
//! development; data is lost when the process exits.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeSet;
use tokio::sync::RwLock;

use strata_core::{ConfigDocument, DocumentDraft};

use crate::collection;
use crate::traits::DocumentStore;
use crate::StoreResult;

/// In-memory document store
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<Vec<ConfigDocument>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Whether the store holds no documents
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn append(&self, draft: DocumentDraft) -> StoreResult<ConfigDocument> {
        // Version computation and insertion share one write-lock
        // acquisition; racing appends for the same scope serialize here.
        let mut documents = self.documents.write().await;
        let version = collection::next_version(&documents, &draft);
        let document = draft.into_document(version, Utc::now());
        documents.push(document.clone());
        tracing::debug!(
            component = %document.component_key,
            scope = %document.scope_type.as_str(),
            version,
            "appended document"
        );
        Ok(document)
    }

    async fn scan(
        &self,
        tenant: &str,
        env: &str,
        component_key: &str,
    ) -> StoreResult<Vec<ConfigDocument>> {
        let documents = self.documents.read().await;
        Ok(collection::scan(&documents, tenant, env, component_key))
    }

    async fn component_keys(&self, tenant: &str, env: &str) -> StoreResult<BTreeSet<String>> {
        let documents = self.documents.read().await;
        Ok(collection::component_keys(&documents, tenant, env))
    }

    async fn remove_all(&self) -> StoreResult<usize> {
        let mut documents = self.documents.write().await;
        let removed = documents.len();
        documents.clear();
        Ok(removed)
    }

    async fn remove_where(
        &self,
        tenant: &str,
        env: &str,
        component_key: &str,
    ) -> StoreResult<usize> {
        let mut documents = self.documents.write().await;
        let kept = collection::retain_other_identities(&documents, tenant, env, component_key);
        let removed = documents.len() - kept.len();
        *documents = kept;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::{ScopeType, Value};

    fn draft(key: &str, scope: ScopeType, scope_key: &str) -> DocumentDraft {
        DocumentDraft {
            tenant: "default".to_string(),
            env: "dev".to_string(),
            component_key: key.to_string(),
            scope_type: scope,
            scope_key: scope_key.to_string(),
            value: Value::empty_object(),
            created_by: "dev".to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_assigns_sequential_versions() {
        let store = MemoryStore::new();

        for expected in 1..=5u64 {
            let doc = store
                .append(draft("header", ScopeType::Global, "*"))
                .await
                .unwrap();
            assert_eq!(doc.version, expected);
        }
    }

    #[tokio::test]
    async fn test_versions_are_per_scope() {
        let store = MemoryStore::new();

        let a = store
            .append(draft("header", ScopeType::Global, "*"))
            .await
            .unwrap();
        let b = store
            .append(draft("header", ScopeType::Page, "home"))
            .await
            .unwrap();
        let c = store
            .append(draft("header", ScopeType::Global, "*"))
            .await
            .unwrap();

        assert_eq!(a.version, 1);
        assert_eq!(b.version, 1);
        assert_eq!(c.version, 2);
    }

    #[tokio::test]
    async fn test_scan_returns_only_matching_identity() {
        let store = MemoryStore::new();
        store
            .append(draft("header", ScopeType::Global, "*"))
            .await
            .unwrap();
        store
            .append(draft("footer", ScopeType::Global, "*"))
            .await
            .unwrap();

        let docs = store.scan("default", "dev", "header").await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].component_key, "header");

        let docs = store.scan("default", "prod", "header").await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_remove_where_leaves_other_components() {
        let store = MemoryStore::new();
        store
            .append(draft("header", ScopeType::Global, "*"))
            .await
            .unwrap();
        store
            .append(draft("header", ScopeType::Page, "home"))
            .await
            .unwrap();
        store
            .append(draft("footer", ScopeType::Global, "*"))
            .await
            .unwrap();

        let removed = store.remove_where("default", "dev", "header").await.unwrap();
        assert_eq!(removed, 2);
        assert_eq!(store.len().await, 1);

        let keys = store.component_keys("default", "dev").await.unwrap();
        assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["footer"]);
    }

    #[tokio::test]
    async fn test_remove_all() {
        let store = MemoryStore::new();
        store
            .append(draft("header", ScopeType::Global, "*"))
            .await
            .unwrap();
        store
            .append(draft("footer", ScopeType::Global, "*"))
            .await
            .unwrap();

        let removed = store.remove_all().await.unwrap();
        assert_eq!(removed, 2);
        assert!(store.is_empty().await);
    }
}
