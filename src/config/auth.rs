//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::environment::Environment;
use super::error::ValidationError;

/// Signing secret used when none is configured. Rejected in production.
pub const DEV_JWT_SECRET: &str = "ekdkn-development-secret-change-me-0001";

/// Authentication configuration (session tokens, password policy, demo accounts)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: SecretString,

    /// Session token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,

    /// Minimum length for new passwords
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Shared password of the three demo accounts
    #[serde(default = "default_demo_password")]
    pub demo_password: SecretString,

    /// Register the admin/teacher/doctor demo accounts at startup
    #[serde(default = "default_true")]
    pub seed_demo_users: bool,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// In production the built-in development secret is refused.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if secret.len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }
        if *environment == Environment::Production && secret == DEV_JWT_SECRET {
            return Err(ValidationError::DefaultJwtSecretInProduction);
        }
        if self.token_ttl_secs == 0 {
            return Err(ValidationError::InvalidTokenTtl);
        }
        if self.min_password_length == 0 {
            return Err(ValidationError::InvalidPasswordLength);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_secs: default_token_ttl(),
            min_password_length: default_min_password_length(),
            demo_password: default_demo_password(),
            seed_demo_users: true,
        }
    }
}

fn default_jwt_secret() -> SecretString {
    SecretString::new(DEV_JWT_SECRET.to_string())
}

fn default_token_ttl() -> u64 {
    86_400
}

fn default_min_password_length() -> usize {
    6
}

fn default_demo_password() -> SecretString {
    SecretString::new("password123".to_string())
}

fn default_true() -> bool {
    true
}
