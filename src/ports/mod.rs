//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application collaborators and the outside world. Adapters implement
//! these ports; exactly one binding of each is active in a deployment.
//!
//! ## Identity Ports
//!
//! - `IdentityVerifier` - Checks an email/password pair
//! - `UserDirectory` - Looks up and registers staff accounts
//! - `TokenIssuer` - Issues and validates signed session tokens
//!
//! ## Persistence Ports
//!
//! - `DocumentStore` - Per-collection JSON documents keyed by id

mod document_store;
mod identity_verifier;
mod token_issuer;
mod user_directory;

pub use document_store::{Document, DocumentStore, DocumentStoreError};
pub use identity_verifier::IdentityVerifier;
pub use token_issuer::TokenIssuer;
pub use user_directory::UserDirectory;
