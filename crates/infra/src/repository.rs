//! Async document store access.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use taphouse_core::{Document, DocumentId, StoreError};

/// Asynchronous document collection.
///
/// Every method is a suspension point: callers await the store instead of
/// blocking the executor. The store is the only shared mutable resource in
/// the pipeline; its consistency guarantees end at single-document saves
/// (no compare-and-swap across concurrent writers).
#[async_trait]
pub trait DocumentRepository<E: Document>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<E>, StoreError>;

    async fn find_by_id(&self, id: DocumentId) -> Result<Option<E>, StoreError>;

    /// Field-predicate lookup (the generic form of find-by-field queries).
    async fn find_where<P>(&self, predicate: P) -> Result<Vec<E>, StoreError>
    where
        P: Fn(&E) -> bool + Send;

    /// Persist a document. Assigns id and creation timestamp on first save;
    /// refreshes the modification timestamp on every save.
    async fn save(&self, entity: E) -> Result<E, StoreError>;

    async fn delete_by_id(&self, id: DocumentId) -> Result<(), StoreError>;

    async fn exists_by_id(&self, id: DocumentId) -> Result<bool, StoreError>;
}

/// In-memory document collection.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug)]
pub struct InMemoryDocumentStore<E> {
    documents: RwLock<HashMap<DocumentId, E>>,
}

impl<E> InMemoryDocumentStore<E> {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }
}

impl<E> Default for InMemoryDocumentStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Document> DocumentRepository<E> for InMemoryDocumentStore<E> {
    async fn find_all(&self) -> Result<Vec<E>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DocumentId) -> Result<Option<E>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.get(&id).cloned())
    }

    async fn find_where<P>(&self, predicate: P) -> Result<Vec<E>, StoreError>
    where
        P: Fn(&E) -> bool + Send,
    {
        let documents = self.documents.read().await;
        Ok(documents.values().filter(|e| predicate(e)).cloned().collect())
    }

    async fn save(&self, mut entity: E) -> Result<E, StoreError> {
        let mut documents = self.documents.write().await;
        let now = Utc::now();

        let id = match entity.id() {
            None => {
                let id = DocumentId::new();
                entity.assign_id(id);
                entity.mark_created(now);
                entity.mark_modified(now);
                id
            }
            Some(id) => {
                // The clock may not tick between consecutive saves; the
                // modification timestamp must still strictly increase.
                let at = match entity.last_modified_date() {
                    Some(prev) if prev >= now => prev + Duration::microseconds(1),
                    _ => now,
                };
                entity.mark_modified(at);
                id
            }
        };

        documents.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete_by_id(&self, id: DocumentId) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        documents.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: DocumentId) -> Result<bool, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.contains_key(&id))
    }
}
