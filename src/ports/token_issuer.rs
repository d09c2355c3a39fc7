//! Session token port.
//!
//! Tokens let a client resume a session without re-sending the password.

use crate::domain::foundation::{AuthError, UserId};
use crate::domain::records::User;
use crate::domain::session::SessionToken;

/// Issues and validates signed session tokens.
///
/// # Contract
///
/// - `validate` returns `AuthError::TokenExpired` for a well-signed token
///   past its expiry and `AuthError::InvalidToken` for anything else that
///   fails verification
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> Result<SessionToken, AuthError>;

    /// Returns the subject of a valid token.
    fn validate(&self, token: &str) -> Result<UserId, AuthError>;
}
