//! Composition root.
//!
//! Builds one binding of every port from configuration and hands the shared
//! collaborators to the screen handlers by constructor injection.

use std::sync::Arc;

use secrecy::SecretString;
use thiserror::Error;

use crate::adapters::{
    DocumentIdentityVerifier, DocumentUserDirectory, HttpDocumentStore, HttpDocumentStoreConfig,
    InMemoryDocumentStore, InMemoryIdentityVerifier, InMemoryUserDirectory, JwtTokenIssuer,
};
use crate::config::{AppConfig, StorageBackend, ValidationError as ConfigValidationError};
use crate::domain::foundation::{AuthError, CenterId, RecordDate, Role, UserId};
use crate::domain::records::User;
use crate::ports::{DocumentStore, DocumentStoreError, IdentityVerifier, UserDirectory};

use super::handlers::{CenterHandler, EducationHandler, MedicalHandler, ScholarshipHandler};
use super::record_store::{RecordStore, StoreError};
use super::session_manager::{CredentialPolicy, SessionManager};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigValidationError),

    #[error("Document store setup failed: {0}")]
    Storage(#[from] DocumentStoreError),

    #[error("Seeding records failed: {0}")]
    Seed(#[from] StoreError),

    #[error("Seeding demo accounts failed: {0}")]
    Auth(#[from] AuthError),
}

/// The two shared collaborators plus the handlers built on them.
pub struct App {
    pub session: Arc<SessionManager>,
    pub store: Arc<RecordStore>,
    pub education: EducationHandler,
    pub medical: MedicalHandler,
    pub scholarships: ScholarshipHandler,
    pub centers: CenterHandler,
}

impl App {
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        config.validate()?;

        let documents: Arc<dyn DocumentStore> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(InMemoryDocumentStore::new()),
            StorageBackend::Remote => {
                let url = config
                    .storage
                    .remote_url
                    .clone()
                    .ok_or(ConfigValidationError::MissingRequired("STORAGE__REMOTE_URL"))?;
                let mut remote = HttpDocumentStoreConfig::new(url)
                    .with_timeout(config.storage.request_timeout());
                if let Some(key) = &config.storage.remote_api_key {
                    remote = remote.with_api_key(key.clone());
                }
                Arc::new(HttpDocumentStore::new(remote)?)
            }
        };

        let (directory, verifier): (Arc<dyn UserDirectory>, Arc<dyn IdentityVerifier>) =
            match config.storage.backend {
                StorageBackend::Memory => {
                    let directory: Arc<dyn UserDirectory> = Arc::new(InMemoryUserDirectory::new());
                    let verifier = Arc::new(InMemoryIdentityVerifier::new(directory.clone()));
                    (directory, verifier)
                }
                StorageBackend::Remote => {
                    let directory: Arc<dyn UserDirectory> =
                        Arc::new(DocumentUserDirectory::new(documents.clone()));
                    let verifier = Arc::new(DocumentIdentityVerifier::new(
                        directory.clone(),
                        documents.clone(),
                    ));
                    (directory, verifier)
                }
            };

        if config.auth.seed_demo_users {
            seed_demo_users(directory.as_ref(), verifier.as_ref(), &config.auth.demo_password)
                .await?;
        }

        let tokens = Arc::new(JwtTokenIssuer::new(
            &config.auth.jwt_secret,
            config.auth.token_ttl_secs,
        ));
        let session = Arc::new(
            SessionManager::new(verifier, directory)
                .with_token_issuer(tokens)
                .with_policy(CredentialPolicy {
                    min_password_length: config.auth.min_password_length,
                }),
        );

        let store = Arc::new(RecordStore::new(documents).with_baseline(config.dashboard.baseline()));
        if config.storage.seed_demo_data {
            store.seed_reference_data().await?;
        }

        tracing::info!(
            backend = ?config.storage.backend,
            environment = ?config.environment,
            "Application wired"
        );
        Ok(Self::assemble(session, store))
    }

    /// Wires handlers around already-built collaborators.
    pub fn assemble(session: Arc<SessionManager>, store: Arc<RecordStore>) -> Self {
        Self {
            education: EducationHandler::new(session.clone(), store.clone()),
            medical: MedicalHandler::new(session.clone(), store.clone()),
            scholarships: ScholarshipHandler::new(session.clone(), store.clone()),
            centers: CenterHandler::new(session.clone(), store.clone()),
            session,
            store,
        }
    }
}

/// The three reference accounts, all sharing `password`.
pub fn demo_users() -> Result<Vec<User>, AuthError> {
    let created = RecordDate::from_ymd(2024, 1, 1).unwrap_or_default();
    let account = |id: &str, name: &str, email: &str, phone: &str, role: Role, center: Option<&str>| {
        Ok::<_, AuthError>(User {
            id: UserId::new(id)?,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            role,
            profile_image: None,
            center_id: center.map(CenterId::new).transpose()?,
            is_active: true,
            created_at: created,
        })
    };
    Ok(vec![
        account("1", "Admin User", "admin@ekdkn.org", "+91 9876543210", Role::Admin, None)?,
        account(
            "2",
            "Priya Sharma",
            "teacher@ekdkn.org",
            "+91 9876543211",
            Role::Teacher,
            Some("center1"),
        )?,
        account(
            "3",
            "Dr. Amit Patel",
            "doctor@ekdkn.org",
            "+91 9876543212",
            Role::Doctor,
            None,
        )?,
    ])
}

/// Registers the demo accounts. Accounts already present keep their record
/// but get the shared password again.
async fn seed_demo_users(
    directory: &dyn UserDirectory,
    verifier: &dyn IdentityVerifier,
    password: &SecretString,
) -> Result<(), AuthError> {
    for user in demo_users()? {
        match directory.find_by_email(&user.email).await? {
            Some(existing) => verifier.register(&existing, password).await?,
            None => {
                verifier.register(&user, password).await?;
                directory.insert(user).await?;
            }
        }
    }
    tracing::info!("Demo accounts seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::FunctionalArea;
    use crate::domain::records::{Collection, SignupData};

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    #[tokio::test]
    async fn default_config_wires_memory_app_with_demo_data() {
        let app = App::from_config(&AppConfig::default()).await.unwrap();

        assert!(app.session.login("admin@ekdkn.org", &secret("password123")).await);
        let stats = app.store.dashboard_stats().await.unwrap();
        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.total_centers, 2);
        assert_eq!(
            app.session.visible_areas().await,
            FunctionalArea::ALL.to_vec()
        );
    }

    #[tokio::test]
    async fn seeding_can_be_disabled() {
        let mut config = AppConfig::default();
        config.auth.seed_demo_users = false;
        config.storage.seed_demo_data = false;

        let app = App::from_config(&config).await.unwrap();

        assert!(!app.session.login("admin@ekdkn.org", &secret("password123")).await);
        assert!(app.store.students().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_config_is_rejected() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Remote;

        let result = App::from_config(&config).await;

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn reseeding_a_persistent_store_keeps_demo_logins_working() {
        let documents: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
        let wire = || {
            let directory: Arc<dyn UserDirectory> =
                Arc::new(DocumentUserDirectory::new(documents.clone()));
            let verifier: Arc<dyn IdentityVerifier> = Arc::new(DocumentIdentityVerifier::new(
                directory.clone(),
                documents.clone(),
            ));
            (directory, verifier)
        };

        let (directory, verifier) = wire();
        seed_demo_users(directory.as_ref(), verifier.as_ref(), &secret("password123"))
            .await
            .unwrap();
        drop((directory, verifier));

        let (directory, verifier) = wire();
        seed_demo_users(directory.as_ref(), verifier.as_ref(), &secret("password123"))
            .await
            .unwrap();
        let session = SessionManager::new(verifier, directory.clone());

        assert_eq!(documents.list(Collection::Users).await.unwrap().len(), 3);
        assert_eq!(documents.list(Collection::Credentials).await.unwrap().len(), 3);
        assert!(session.login("teacher@ekdkn.org", &secret("password123")).await);
    }

    #[tokio::test]
    async fn signup_on_a_persistent_store_survives_a_restart() {
        let documents: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
        let session_over = |documents: &Arc<dyn DocumentStore>| {
            let directory: Arc<dyn UserDirectory> =
                Arc::new(DocumentUserDirectory::new(documents.clone()));
            let verifier = Arc::new(DocumentIdentityVerifier::new(
                directory.clone(),
                documents.clone(),
            ));
            SessionManager::new(verifier, directory)
        };

        let first = session_over(&documents);
        let created = first
            .try_signup(SignupData {
                name: "Kavita Joshi".to_string(),
                email: "kavita@ekdkn.org".to_string(),
                phone: "+91 9000000009".to_string(),
                role: Role::Teacher,
                password: secret("kavita-pass"),
                center_id: None,
            })
            .await
            .unwrap();
        drop(first);

        let restarted = session_over(&documents);
        assert!(restarted.login("kavita@ekdkn.org", &secret("kavita-pass")).await);
        assert_eq!(restarted.current_user().await.map(|u| u.id), Some(created.id));
    }

    #[test]
    fn demo_teacher_belongs_to_first_center() {
        let users = demo_users().unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[1].role, Role::Teacher);
        assert_eq!(users[1].center_id.as_ref().map(|c| c.as_str()), Some("center1"));
    }
}
