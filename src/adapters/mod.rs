//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application collaborators to concrete backends:
//! - `auth` - Password verification and session tokens
//! - `directory` - Staff account lookup (in-memory, document-backed)
//! - `storage` - Document stores (in-memory, HTTP)

pub mod auth;
pub mod directory;
pub mod storage;

pub use auth::{DocumentIdentityVerifier, InMemoryIdentityVerifier, JwtTokenIssuer};
pub use directory::{DocumentUserDirectory, InMemoryUserDirectory};
pub use storage::{HttpDocumentStore, HttpDocumentStoreConfig, InMemoryDocumentStore};
