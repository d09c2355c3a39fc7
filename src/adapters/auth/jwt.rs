//! HS256 session tokens.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, Timestamp, UserId};
use crate::domain::records::User;
use crate::domain::session::SessionToken;
use crate::ports::TokenIssuer;

pub const DEFAULT_ISSUER: &str = "ekdkn";

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    email: String,
    role: String,
    iat: u64,
    exp: u64,
    iss: String,
}

/// Signs and checks session tokens with a shared secret.
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: u64,
    issuer: String,
}

impl JwtTokenIssuer {
    pub fn new(secret: &SecretString, ttl_secs: u64) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            ttl_secs,
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    fn issue_at(&self, user: &User, now: Timestamp) -> Result<SessionToken, AuthError> {
        let expires_at = now.plus_secs(self.ttl_secs);
        let claims = SessionClaims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            iat: now.as_unix_secs(),
            exp: expires_at.as_unix_secs(),
            iss: self.issuer.clone(),
        };

        let value = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!("Failed to sign session token: {}", e);
                AuthError::service_unavailable("token signing failed")
            })?;

        Ok(SessionToken::new(value, expires_at))
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User) -> Result<SessionToken, AuthError> {
        self.issue_at(user, Timestamp::now())
    }

    fn validate(&self, token: &str) -> Result<UserId, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.leeway = 0;

        let data = decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Session token expired");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::warn!("Session token rejected: {}", e);
                    AuthError::InvalidToken
                }
            }
        })?;

        UserId::new(data.claims.sub).map_err(|_| AuthError::InvalidToken)
    }
}
