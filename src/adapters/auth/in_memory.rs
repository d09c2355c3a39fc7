//! In-memory identity verifier.
//!
//! Credentials are held as a per-account random salt plus
//! HMAC-SHA256(salt, password), keyed by user id. Verification resolves the
//! email through the directory, recomputes the digest and compares in
//! constant time. Nothing survives a restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use super::credential::Credential;
use crate::domain::foundation::{AuthError, UserId};
use crate::domain::records::User;
use crate::ports::{IdentityVerifier, UserDirectory};

/// Verifies passwords against credentials registered in this process.
///
/// Accounts themselves live in the wrapped `UserDirectory`; this adapter only
/// owns the credential table.
pub struct InMemoryIdentityVerifier {
    directory: Arc<dyn UserDirectory>,
    credentials: RwLock<HashMap<UserId, Credential>>,
    /// Optional error to return for all calls (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl InMemoryIdentityVerifier {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            directory,
            credentials: RwLock::new(HashMap::new()),
            force_error: RwLock::new(None),
        }
    }

    /// Adds a credential for `user_id` before the verifier is shared.
    pub fn with_credential(
        mut self,
        user_id: &UserId,
        password: &SecretString,
    ) -> Result<Self, AuthError> {
        let credential = Credential::derive(password)?;
        self.credentials.get_mut().insert(user_id.clone(), credential);
        Ok(self)
    }

    /// Forces all calls to return the specified error.
    pub fn with_error(mut self, error: AuthError) -> Self {
        *self.force_error.get_mut() = Some(error);
        self
    }

    /// Sets or clears the forced error at runtime.
    pub async fn set_error(&self, error: Option<AuthError>) {
        *self.force_error.write().await = error;
    }

    /// Clears the forced error.
    pub async fn clear_error(&self) {
        self.set_error(None).await;
    }

    /// Returns the number of registered credentials.
    pub async fn credential_count(&self) -> usize {
        self.credentials.read().await.len()
    }

    async fn check_forced_error(&self) -> Result<(), AuthError> {
        match self.force_error.read().await.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IdentityVerifier for InMemoryIdentityVerifier {
    async fn verify(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<Option<User>, AuthError> {
        self.check_forced_error().await?;

        let Some(user) = self.directory.find_by_email(email).await? else {
            return Ok(None);
        };
        let matched = match self.credentials.read().await.get(&user.id) {
            Some(credential) => credential.matches(password)?,
            None => false,
        };
        Ok((matched && user.is_active).then_some(user))
    }

    async fn register(&self, user: &User, password: &SecretString) -> Result<(), AuthError> {
        self.check_forced_error().await?;

        let credential = Credential::derive(password)?;
        self.credentials
            .write()
            .await
            .insert(user.id.clone(), credential);
        tracing::debug!(user_id = %user.id, "Credential registered");
        Ok(())
    }

    async fn revoke(&self, user_id: &UserId) -> Result<bool, AuthError> {
        self.check_forced_error().await?;

        let removed = self.credentials.write().await.remove(user_id).is_some();
        if removed {
            tracing::info!(user_id = %user_id, "Credential revoked");
        }
        Ok(removed)
    }
}
