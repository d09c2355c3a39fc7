//! In-Memory Document Store Adapter
//!
//! Holds every collection in process memory. Lost on restart.
//! Used as the default binding and throughout the tests.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::records::Collection;
use crate::ports::{Document, DocumentStore, DocumentStoreError};

/// In-memory storage for documents, insertion-ordered per collection
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<(String, Document)>>>,
    /// Optional error to return for all calls (for error testing)
    force_error: RwLock<Option<DocumentStoreError>>,
}

impl InMemoryDocumentStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces all calls to return the specified error.
    pub fn with_error(mut self, error: DocumentStoreError) -> Self {
        *self.force_error.get_mut() = Some(error);
        self
    }

    /// Sets or clears the forced error at runtime.
    pub async fn set_error(&self, error: Option<DocumentStoreError>) {
        *self.force_error.write().await = error;
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.collections.write().await.clear();
    }

    /// Get the number of documents in a collection
    pub async fn count(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .await
            .get(&collection)
            .map_or(0, Vec::len)
    }

    async fn check_forced_error(&self) -> Result<(), DocumentStoreError> {
        match self.force_error.read().await.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        self.check_forced_error().await?;
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|(key, _)| key == id))
            .map(|(_, doc)| doc.clone()))
    }

    async fn set(
        &self,
        collection: Collection,
        id: &str,
        document: Document,
    ) -> Result<(), DocumentStoreError> {
        self.check_forced_error().await?;
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection).or_default();
        match docs.iter_mut().find(|(key, _)| key == id) {
            Some((_, existing)) => *existing = document,
            None => docs.push((id.to_string(), document)),
        }
        Ok(())
    }

    async fn append(
        &self,
        collection: Collection,
        id: &str,
        document: Document,
    ) -> Result<(), DocumentStoreError> {
        self.check_forced_error().await?;
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection).or_default();
        if docs.iter().any(|(key, _)| key == id) {
            return Err(DocumentStoreError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
        docs.push((id.to_string(), document));
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, DocumentStoreError> {
        self.check_forced_error().await?;
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(&collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|(key, _)| key != id);
        Ok(docs.len() != before)
    }

    async fn list(&self, collection: Collection) -> Result<Vec<Document>, DocumentStoreError> {
        self.check_forced_error().await?;
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|docs| docs.iter().map(|(_, doc)| doc.clone()).collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn append_then_get() {
        let store = InMemoryDocumentStore::new();
        store
            .append(Collection::Students, "1", json!({"id": "1", "name": "A"}))
            .await
            .unwrap();

        let doc = store.get(Collection::Students, "1").await.unwrap();
        assert_eq!(doc, Some(json!({"id": "1", "name": "A"})));
        assert!(store.get(Collection::Patients, "1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn append_rejects_duplicate_id_and_keeps_original() {
        let store = InMemoryDocumentStore::new();
        store
            .append(Collection::Centers, "center1", json!({"v": 1}))
            .await
            .unwrap();

        let result = store
            .append(Collection::Centers, "center1", json!({"v": 2}))
            .await;

        assert!(matches!(result, Err(DocumentStoreError::DuplicateId { .. })));
        assert_eq!(
            store.get(Collection::Centers, "center1").await.unwrap(),
            Some(json!({"v": 1}))
        );
        assert_eq!(store.count(Collection::Centers).await, 1);
    }

    #[tokio::test]
    async fn set_replaces_in_place_preserving_order() {
        let store = InMemoryDocumentStore::new();
        store.append(Collection::Students, "a", json!(1)).await.unwrap();
        store.append(Collection::Students, "b", json!(2)).await.unwrap();

        store.set(Collection::Students, "a", json!(10)).await.unwrap();
        store.set(Collection::Students, "c", json!(3)).await.unwrap();

        let docs = store.list(Collection::Students).await.unwrap();
        assert_eq!(docs, vec![json!(10), json!(2), json!(3)]);
    }

    #[tokio::test]
    async fn delete_removes_only_the_named_document() {
        let store = InMemoryDocumentStore::new();
        store.append(Collection::Students, "a", json!(1)).await.unwrap();
        store.append(Collection::Students, "b", json!(2)).await.unwrap();

        assert!(store.delete(Collection::Students, "a").await.unwrap());
        assert!(!store.delete(Collection::Students, "a").await.unwrap());
        assert!(!store.delete(Collection::Patients, "b").await.unwrap());

        assert_eq!(store.list(Collection::Students).await.unwrap(), vec![json!(2)]);
    }

    #[tokio::test]
    async fn collections_are_independent() {
        let store = InMemoryDocumentStore::new();
        store.append(Collection::Scholars, "x", json!({})).await.unwrap();
        store.append(Collection::Patients, "x", json!({})).await.unwrap();

        assert_eq!(store.count(Collection::Scholars).await, 1);
        assert_eq!(store.count(Collection::Patients).await, 1);

        store.clear().await;
        assert!(store.list(Collection::Scholars).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn forced_error_applies_to_every_call() {
        let store = InMemoryDocumentStore::new();
        store
            .set_error(Some(DocumentStoreError::Backend("disk full".into())))
            .await;
        assert!(store.list(Collection::Users).await.is_err());
        store.set_error(None).await;
        assert!(store.list(Collection::Users).await.is_ok());
    }
}
