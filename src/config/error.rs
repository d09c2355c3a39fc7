//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("JWT secret must be at least 32 bytes")]
    JwtSecretTooShort,

    #[error("The development JWT secret must not be used in production")]
    DefaultJwtSecretInProduction,

    #[error("Invalid token TTL")]
    InvalidTokenTtl,

    #[error("Minimum password length must be at least 1")]
    InvalidPasswordLength,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Remote document store URL must be http(s)")]
    InvalidRemoteUrl,

    #[error("Remote document store must use HTTPS in production")]
    RemoteUrlMustBeHttps,

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
