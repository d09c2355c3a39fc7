//! Identity adapters: password verification and session tokens.

mod credential;
mod document;
mod in_memory;
mod jwt;

pub use document::DocumentIdentityVerifier;
pub use in_memory::InMemoryIdentityVerifier;
pub use jwt::{JwtTokenIssuer, DEFAULT_ISSUER};
