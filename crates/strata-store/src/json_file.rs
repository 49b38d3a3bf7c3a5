//! JSON-file-backed document store
//!
//! Mirrors the in-memory collection into a single JSON file that is fully
//! rewritten on every mutation, awaited before the mutating call returns.
//! The file is serialized from the candidate state first and only then is
//! the in-memory collection updated, so a failed write leaves memory
//! untouched.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use strata_core::{ConfigDocument, DocumentDraft};

use crate::collection;
use crate::error::StoreError;
use crate::traits::DocumentStore;
use crate::StoreResult;

/// Document store persisted to a JSON file
pub struct JsonFileStore {
    path: PathBuf,
    documents: RwLock<Vec<ConfigDocument>>,
}

impl JsonFileStore {
    /// Open a store at the given path, loading the existing collection.
    /// A missing file is an empty store; parent directories are created.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let documents = if tokio::fs::try_exists(&path).await? {
            let raw = tokio::fs::read_to_string(&path).await?;
            serde_json::from_str::<Vec<ConfigDocument>>(&raw).map_err(|source| {
                StoreError::Corrupt {
                    path: path.display().to_string(),
                    source,
                }
            })?
        } else {
            Vec::new()
        };

        tracing::debug!(
            path = %path.display(),
            count = documents.len(),
            "opened document store"
        );

        Ok(Self {
            path,
            documents: RwLock::new(documents),
        })
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Whether the store holds no documents
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, documents: &[ConfigDocument]) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(documents).map_err(StoreError::Serialize)?;
        tokio::fs::write(&self.path, raw).await?;
        tracing::debug!(
            path = %self.path.display(),
            count = documents.len(),
            "persisted document store"
        );
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn append(&self, draft: DocumentDraft) -> StoreResult<ConfigDocument> {
        // The write lock is held across persistence: version assignment,
        // file rewrite, and commit form one critical section, which gives
        // both write serialization and read-after-write consistency.
        let mut documents = self.documents.write().await;
        let version = collection::next_version(&documents, &draft);
        let document = draft.into_document(version, Utc::now());

        let mut candidate = documents.clone();
        candidate.push(document.clone());
        self.persist(&candidate).await?;

        *documents = candidate;
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
        self.persist(&[]).await?;
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
        self.persist(&kept).await?;

        let removed = documents.len() - kept.len();
        *documents = kept;
        Ok(removed)
    }
}
