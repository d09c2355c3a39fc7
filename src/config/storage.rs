//! Storage configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::environment::Environment;
use super::error::ValidationError;

/// Which document store binding is active
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Volatile process memory
    #[default]
    Memory,
    /// Remote HTTP document service
    Remote,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Base URL of the remote document service
    pub remote_url: Option<String>,

    /// Bearer key for the remote document service
    pub remote_api_key: Option<SecretString>,

    /// Remote request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Write the reference students and centers at startup
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
}

impl StorageConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.backend == StorageBackend::Remote {
            let url = self
                .remote_url
                .as_deref()
                .filter(|u| !u.is_empty())
                .ok_or(ValidationError::MissingRequired("STORAGE__REMOTE_URL"))?;
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidRemoteUrl);
            }
            if *environment == Environment::Production && !url.starts_with("https://") {
                return Err(ValidationError::RemoteUrlMustBeHttps);
            }
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            remote_url: None,
            remote_api_key: None,
            request_timeout_secs: default_request_timeout(),
            seed_demo_data: true,
        }
    }
}

fn default_request_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(url: &str) -> StorageConfig {
        StorageConfig {
            backend: StorageBackend::Remote,
            remote_url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_memory_backend_needs_nothing() {
        assert!(StorageConfig::default().validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_remote_requires_url() {
        let config = StorageConfig {
            backend: StorageBackend::Remote,
            ..Default::default()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("STORAGE__REMOTE_URL"))
        );
    }

    #[test]
    fn test_remote_url_scheme() {
        assert_eq!(
            remote("ftp://docs").validate(&Environment::Development),
            Err(ValidationError::InvalidRemoteUrl)
        );
        assert!(remote("http://localhost:9000").validate(&Environment::Development).is_ok());
        assert_eq!(
            remote("http://docs.example.org").validate(&Environment::Production),
            Err(ValidationError::RemoteUrlMustBeHttps)
        );
    }

    #[test]
    fn test_timeout_bounds() {
        let config = StorageConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidTimeout)
        );
        assert_eq!(StorageConfig::default().request_timeout(), Duration::from_secs(10));
    }
}
