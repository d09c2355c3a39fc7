//! Document store port.
//!
//! Records are persisted as JSON documents in named collections, each keyed
//! by the record id. Two bindings exist: volatile process memory and a remote
//! HTTP document service.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::records::Collection;

/// A stored document.
pub type Document = serde_json::Value;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentStoreError {
    #[error("Document {id} not found in {collection}")]
    NotFound { collection: Collection, id: String },

    #[error("Document {id} already exists in {collection}")]
    DuplicateId { collection: Collection, id: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

impl DocumentStoreError {
    /// Whether retrying the same call could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, DocumentStoreError::Transport(_))
    }
}

/// Per-collection document access.
///
/// # Contract
///
/// - `append` adds a new document and fails with `DuplicateId` if the id is
///   taken; the collection is unchanged on failure
/// - `set` inserts or replaces
/// - `delete` removes and reports whether the document existed
/// - `list` returns documents in insertion order
/// - a completed write is visible to every subsequent read
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: Collection, id: &str)
        -> Result<Option<Document>, DocumentStoreError>;

    async fn set(
        &self,
        collection: Collection,
        id: &str,
        document: Document,
    ) -> Result<(), DocumentStoreError>;

    async fn append(
        &self,
        collection: Collection,
        id: &str,
        document: Document,
    ) -> Result<(), DocumentStoreError>;

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, DocumentStoreError>;

    async fn list(&self, collection: Collection) -> Result<Vec<Document>, DocumentStoreError>;
}
