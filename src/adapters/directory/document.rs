//! User directory backed by the `users` collection of a document store.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, UserId};
use crate::domain::records::{Collection, User};
use crate::ports::{DocumentStore, DocumentStoreError, UserDirectory};

pub struct DocumentUserDirectory {
    store: Arc<dyn DocumentStore>,
}

impl DocumentUserDirectory {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn all_users(&self) -> Result<Vec<User>, AuthError> {
        let documents = self
            .store
            .list(Collection::Users)
            .await
            .map_err(unavailable)?;
        documents
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(corrupt))
            .collect()
    }
}

fn unavailable(e: DocumentStoreError) -> AuthError {
    tracing::error!(error = %e, "User directory backend failed");
    AuthError::service_unavailable(e.to_string())
}

fn corrupt(e: serde_json::Error) -> AuthError {
    tracing::error!(error = %e, "Stored user document is malformed");
    AuthError::service_unavailable(format!("malformed user document: {}", e))
}

#[async_trait]
impl UserDirectory for DocumentUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let users = self.all_users().await?;
        Ok(users.into_iter().find(|u| u.has_email(email)))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        let document = self
            .store
            .get(Collection::Users, id.as_str())
            .await
            .map_err(unavailable)?;
        document
            .map(|doc| serde_json::from_value(doc).map_err(corrupt))
            .transpose()
    }

    /// The email check and the append are two calls; callers that need the
    /// pair to be atomic must serialise inserts themselves.
    async fn insert(&self, user: User) -> Result<(), AuthError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered);
        }
        let document = serde_json::to_value(&user)
            .map_err(|e| AuthError::service_unavailable(format!("encode user: {}", e)))?;
        self.store
            .append(Collection::Users, user.id.as_str(), document)
            .await
            .map_err(unavailable)
    }
}
