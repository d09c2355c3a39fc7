//! SessionManager - owns the signed-in identity and the display language.
//!
//! Login, signup, restore and logout are single-flight: they queue on one
//! async mutex, so a second login issued while the first is in flight runs
//! after it and its outcome is the final state. The loading flag is set
//! exactly while one of those calls holds the mutex.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::{AuthError, FunctionalArea, Language, RecordDate, UserId};
use crate::domain::records::{normalize_email, SignupData, User};
use crate::domain::session::{SessionState, SessionToken};
use crate::ports::{IdentityVerifier, TokenIssuer, UserDirectory};

/// Rules applied to new passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialPolicy {
    pub min_password_length: usize,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self {
            min_password_length: 6,
        }
    }
}

impl CredentialPolicy {
    pub fn check(&self, password: &SecretString) -> Result<(), AuthError> {
        if password.expose_secret().chars().count() < self.min_password_length {
            return Err(AuthError::WeakPassword {
                min_length: self.min_password_length,
            });
        }
        Ok(())
    }
}

struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct SessionManager {
    verifier: Arc<dyn IdentityVerifier>,
    directory: Arc<dyn UserDirectory>,
    tokens: Option<Arc<dyn TokenIssuer>>,
    policy: CredentialPolicy,
    state: RwLock<SessionState>,
    flight: Mutex<()>,
    loading: AtomicBool,
}

impl SessionManager {
    pub fn new(verifier: Arc<dyn IdentityVerifier>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            verifier,
            directory,
            tokens: None,
            policy: CredentialPolicy::default(),
            state: RwLock::new(SessionState::new()),
            flight: Mutex::new(()),
            loading: AtomicBool::new(false),
        }
    }

    pub fn with_token_issuer(mut self, issuer: Arc<dyn TokenIssuer>) -> Self {
        self.tokens = Some(issuer);
        self
    }

    pub fn with_policy(mut self, policy: CredentialPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Signs in. Returns false on any failure; the session is then unchanged.
    pub async fn login(&self, email: &str, password: &SecretString) -> bool {
        self.try_login(email, password).await.is_ok()
    }

    pub async fn try_login(&self, email: &str, password: &SecretString) -> Result<User, AuthError> {
        let _flight = self.flight.lock().await;
        let _loading = LoadingGuard::start(&self.loading);

        let user = match self.verifier.verify(email, password).await? {
            Some(user) => user,
            None => {
                tracing::warn!(email = %normalize_email(email), "Login failed");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let token = self.issue_token(&user)?;
        self.state.write().await.authenticate(user.clone(), token);
        tracing::info!(user_id = %user.id, role = %user.role.as_str(), "Logged in");
        Ok(user)
    }

    /// Creates an account and signs it in. Returns false on any failure.
    pub async fn signup(&self, data: SignupData) -> bool {
        self.try_signup(data).await.is_ok()
    }

    pub async fn try_signup(&self, data: SignupData) -> Result<User, AuthError> {
        let _flight = self.flight.lock().await;
        let _loading = LoadingGuard::start(&self.loading);

        data.validate()?;
        self.policy.check(&data.password)?;

        if self.directory.find_by_email(&data.email).await?.is_some() {
            tracing::info!(email = %normalize_email(&data.email), "Signup rejected: email taken");
            return Err(AuthError::EmailAlreadyRegistered);
        }

        // No directory entry may exist without a credential.
        let user = User::from_signup(UserId::generate(), &data, RecordDate::today());
        self.verifier.register(&user, &data.password).await?;
        if let Err(e) = self.directory.insert(user.clone()).await {
            if let Err(revoke_err) = self.verifier.revoke(&user.id).await {
                tracing::warn!(user_id = %user.id, error = %revoke_err, "Orphan credential left after failed signup");
            }
            return Err(e);
        }

        let token = self.issue_token(&user)?;
        self.state.write().await.authenticate(user.clone(), token);
        tracing::info!(user_id = %user.id, role = %user.role.as_str(), "Signed up");
        Ok(user)
    }

    /// Resumes a session from a previously issued token.
    pub async fn restore(&self, token: &str) -> bool {
        self.try_restore(token).await.is_ok()
    }

    /// On failure the session is left signed out.
    pub async fn try_restore(&self, token: &str) -> Result<User, AuthError> {
        let _flight = self.flight.lock().await;
        let _loading = LoadingGuard::start(&self.loading);

        match self.resolve_token(token).await {
            Ok(user) => {
                let fresh = self.issue_token(&user)?;
                self.state.write().await.authenticate(user.clone(), fresh);
                tracing::info!(user_id = %user.id, "Session restored");
                Ok(user)
            }
            Err(e) => {
                self.state.write().await.clear();
                tracing::debug!(error = %e, "Session restore failed");
                Err(e)
            }
        }
    }

    async fn resolve_token(&self, token: &str) -> Result<User, AuthError> {
        let issuer = self.tokens.as_ref().ok_or(AuthError::InvalidToken)?;
        let user_id = issuer.validate(token)?;
        match self.directory.find_by_id(&user_id).await? {
            Some(user) if user.is_active => Ok(user),
            _ => Err(AuthError::UserNotFound),
        }
    }

    pub async fn logout(&self) {
        let _flight = self.flight.lock().await;
        let mut state = self.state.write().await;
        if let Some(user) = state.user() {
            tracing::info!(user_id = %user.id, "Logged out");
        }
        state.clear();
    }

    pub async fn set_language(&self, language: Language) {
        self.state.write().await.set_language(language);
    }

    /// Switches between the two supported languages and returns the new one.
    pub async fn toggle_language(&self) -> Language {
        let mut state = self.state.write().await;
        let next = state.language().toggle();
        state.set_language(next);
        next
    }

    pub async fn language(&self) -> Language {
        self.state.read().await.language()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user().cloned()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    pub async fn session_token(&self) -> Option<SessionToken> {
        self.state.read().await.token().cloned()
    }

    pub async fn visible_areas(&self) -> Vec<FunctionalArea> {
        self.state.read().await.visible_areas()
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    fn issue_token(&self, user: &User) -> Result<Option<SessionToken>, AuthError> {
        self.tokens
            .as_ref()
            .map(|issuer| issuer.issue(user))
            .transpose()
    }
}
