//! Identity verifier port.
//!
//! The session manager never compares passwords itself. It hands the pair to
//! an `IdentityVerifier`, which answers with the matching account or nothing.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::foundation::{AuthError, UserId};
use crate::domain::records::User;

/// Verifies credentials and records new ones.
///
/// # Contract
///
/// Implementations must:
/// - Match emails case-insensitively
/// - Return `Ok(None)` for an unknown email and for a wrong password alike
/// - Key credentials by user id, so registering one account never replaces
///   another account's credential
/// - Never log or persist the plain password
/// - Return `AuthError::ServiceUnavailable` for transient failures
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Returns the account whose currently-valid credential matches.
    async fn verify(&self, email: &str, password: &SecretString)
        -> Result<Option<User>, AuthError>;

    /// Stores (or replaces) the credential for `user`.
    async fn register(&self, user: &User, password: &SecretString) -> Result<(), AuthError>;

    /// Invalidates the credential of `user_id`. Returns false if there was none.
    async fn revoke(&self, user_id: &UserId) -> Result<bool, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_verifier_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn IdentityVerifier) {}
        fn _assert_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_send_sync::<std::sync::Arc<dyn IdentityVerifier>>();
    }
}
