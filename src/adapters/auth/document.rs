//! Identity verifier backed by the `credentials` collection of a document
//! store, so password digests persist alongside the `users` collection.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;

use super::credential::Credential;
use crate::domain::foundation::{AuthError, UserId};
use crate::domain::records::{Collection, User};
use crate::ports::{DocumentStore, DocumentStoreError, IdentityVerifier, UserDirectory};

pub struct DocumentIdentityVerifier {
    directory: Arc<dyn UserDirectory>,
    store: Arc<dyn DocumentStore>,
}

impl DocumentIdentityVerifier {
    pub fn new(directory: Arc<dyn UserDirectory>, store: Arc<dyn DocumentStore>) -> Self {
        Self { directory, store }
    }

    async fn credential(&self, user_id: &UserId) -> Result<Option<Credential>, AuthError> {
        let document = self
            .store
            .get(Collection::Credentials, user_id.as_str())
            .await
            .map_err(unavailable)?;
        document
            .map(|doc| {
                serde_json::from_value(doc).map_err(|e| {
                    tracing::error!(user_id = %user_id, error = %e, "Stored credential is malformed");
                    AuthError::service_unavailable(format!("malformed credential: {}", e))
                })
            })
            .transpose()
    }
}

fn unavailable(e: DocumentStoreError) -> AuthError {
    tracing::error!(error = %e, "Credential store failed");
    AuthError::service_unavailable(e.to_string())
}

#[async_trait]
impl IdentityVerifier for DocumentIdentityVerifier {
    async fn verify(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<Option<User>, AuthError> {
        let Some(user) = self.directory.find_by_email(email).await? else {
            return Ok(None);
        };
        let matched = match self.credential(&user.id).await? {
            Some(credential) => credential.matches(password)?,
            None => false,
        };
        Ok((matched && user.is_active).then_some(user))
    }

    async fn register(&self, user: &User, password: &SecretString) -> Result<(), AuthError> {
        let credential = Credential::derive(password)?;
        let document = serde_json::to_value(&credential)
            .map_err(|e| AuthError::service_unavailable(format!("encode credential: {}", e)))?;
        self.store
            .set(Collection::Credentials, user.id.as_str(), document)
            .await
            .map_err(unavailable)?;
        tracing::debug!(user_id = %user.id, "Credential stored");
        Ok(())
    }

    async fn revoke(&self, user_id: &UserId) -> Result<bool, AuthError> {
        let removed = self
            .store
            .delete(Collection::Credentials, user_id.as_str())
            .await
            .map_err(unavailable)?;
        if removed {
            tracing::info!(user_id = %user_id, "Credential revoked");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::directory::DocumentUserDirectory;
    use crate::adapters::storage::InMemoryDocumentStore;
    use crate::domain::foundation::{RecordDate, Role};

    fn teacher() -> User {
        User {
            id: UserId::new("t-7").unwrap(),
            name: "Meena Rao".to_string(),
            email: "meena@ekdkn.org".to_string(),
            phone: "+91 9000000002".to_string(),
            role: Role::Teacher,
            profile_image: None,
            center_id: None,
            is_active: true,
            created_at: RecordDate::from_ymd(2024, 5, 1).unwrap(),
        }
    }

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    fn verifier_over(store: Arc<InMemoryDocumentStore>) -> DocumentIdentityVerifier {
        let directory = Arc::new(DocumentUserDirectory::new(store.clone()));
        DocumentIdentityVerifier::new(directory, store)
    }

    #[tokio::test]
    async fn credential_outlives_the_verifier_instance() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let first = verifier_over(store.clone());
        DocumentUserDirectory::new(store.clone())
            .insert(teacher())
            .await
            .unwrap();
        first.register(&teacher(), &secret("secret12")).await.unwrap();
        drop(first);

        let restarted = verifier_over(store.clone());

        let user = restarted
            .verify("Meena@ekdkn.org", &secret("secret12"))
            .await
            .unwrap();
        assert_eq!(user.map(|u| u.id), Some(teacher().id));
        assert_eq!(store.count(Collection::Credentials).await, 1);
    }

    #[tokio::test]
    async fn stored_document_never_holds_the_password() {
        let store = Arc::new(InMemoryDocumentStore::new());
        verifier_over(store.clone())
            .register(&teacher(), &secret("secret12"))
            .await
            .unwrap();

        let doc = store
            .get(Collection::Credentials, "t-7")
            .await
            .unwrap()
            .unwrap();
        assert!(!doc.to_string().contains("secret12"));
    }

    #[tokio::test]
    async fn wrong_password_and_revoked_credential_do_not_verify() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let verifier = verifier_over(store.clone());
        DocumentUserDirectory::new(store.clone())
            .insert(teacher())
            .await
            .unwrap();
        verifier.register(&teacher(), &secret("secret12")).await.unwrap();

        assert!(verifier
            .verify("meena@ekdkn.org", &secret("secret13"))
            .await
            .unwrap()
            .is_none());

        assert!(verifier.revoke(&teacher().id).await.unwrap());
        assert!(verifier
            .verify("meena@ekdkn.org", &secret("secret12"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn backend_failure_is_service_unavailable() {
        let store = Arc::new(
            InMemoryDocumentStore::new()
                .with_error(DocumentStoreError::Transport("connection refused".into())),
        );

        let result = verifier_over(store).register(&teacher(), &secret("secret12")).await;

        assert!(matches!(result, Err(AuthError::ServiceUnavailable(_))));
    }
}
