//! Document store adapters.
//!
//! - `InMemoryDocumentStore` - volatile, process-local (reference binding)
//! - `HttpDocumentStore` - remote JSON document service over HTTP

mod http_document_store;
mod in_memory_document_store;

pub use http_document_store::{HttpDocumentStore, HttpDocumentStoreConfig};
pub use in_memory_document_store::InMemoryDocumentStore;
