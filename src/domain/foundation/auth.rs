//! Authentication errors for the domain layer.
//!
//! These errors are **domain-centric** - they describe what went wrong from
//! the session's perspective, not the identity backend's. Any credential
//! verifier or user directory reports failures through this type.

use thiserror::Error;

use super::ValidationError;

/// Errors that can occur while signing in, signing up or restoring a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email/password pair did not match. Deliberately does not say which half was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup with an email that already has an account.
    #[error("Email is already registered")]
    EmailAlreadyRegistered,

    /// Token or credential is valid but the user record no longer exists.
    #[error("User not found")]
    UserNotFound,

    /// The session token is malformed or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The session token signature is valid but it has expired.
    #[error("Token expired")]
    TokenExpired,

    /// Password shorter than the configured minimum.
    #[error("Password must be at least {min_length} characters long")]
    WeakPassword { min_length: usize },

    /// Signup payload failed validation.
    #[error("Invalid signup data: {0}")]
    InvalidSignup(#[from] ValidationError),

    /// User exists but their role does not allow this action.
    #[error("Insufficient permissions")]
    InsufficientPermissions,

    /// The identity backend is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if the user should sign in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::UserNotFound
        )
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
