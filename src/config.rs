//! Build-time Configuration
//!
//! The service origin is fixed when the bundle is built.

/// Origin used when `STAFF_BOARD_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// How long a notification stays visible
pub const NOTIFICATION_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Service origin without trailing slash
    pub base_url: String,
}

impl ApiConfig {
    /// Read the origin baked in at compile time
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("STAFF_BOARD_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let config = Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: format!("expected an http(s) origin, got {}", self.base_url),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://localhost:8000/").unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_rejects_bad_origin() {
        assert!(matches!(ApiConfig::new("  "), Err(ConfigError::InvalidValue { .. })));
        assert!(ApiConfig::new("ftp://host").is_err());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(ApiConfig::new(DEFAULT_API_URL).is_ok());
    }
}
