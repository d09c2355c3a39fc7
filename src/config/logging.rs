//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Accepts a bare level or a full filter directive such as `ekdkn=debug,info`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let level = self.level.trim();
        if level.is_empty() {
            return Err(ValidationError::InvalidLogLevel(self.level.clone()));
        }
        if !level.contains('=') && !level.contains(',') && !LEVELS.contains(&level) {
            return Err(ValidationError::InvalidLogLevel(self.level.clone()));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_validation() {
        let config = |level: &str| LoggingConfig {
            level: level.to_string(),
            json: false,
        };
        assert!(config("debug").validate().is_ok());
        assert!(config("ekdkn=debug,info").validate().is_ok());
        assert!(config("loud").validate().is_err());
        assert!(config("").validate().is_err());
    }
}
