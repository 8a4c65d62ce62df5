use serde::{Deserialize, Serialize};

use crate::utils::{API_BASE_URL, STORAGE_KEY_SESSION};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub storage_key: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Client-level timeout for the native transport; browsers use fetch defaults
    pub network_timeout_seconds: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:4000".to_string(),
            storage_key: "hrms.auth.session".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 30,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self {
            api_base_url: normalize_base_url(API_BASE_URL),
            storage_key: STORAGE_KEY_SESSION.to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("30").parse().unwrap_or(30),
        }
    }

    pub fn with_base_url(mut self, url: impl AsRef<str>) -> Self {
        self.api_base_url = normalize_base_url(url.as_ref());
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

/// Base URL without trailing slashes, so `base + "/api/..."` stays well-formed
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_dropped() {
        let config = AppConfig::default().with_base_url("https://hr.example.com/ ");
        assert_eq!(config.api_base_url, "https://hr.example.com");
        assert_eq!(normalize_base_url("http://localhost:4000//"), "http://localhost:4000");
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:4000");
        assert_eq!(config.storage_key, "hrms.auth.session");
        assert!(!config.is_production());
    }

    #[test]
    fn from_env_without_overrides_matches_defaults() {
        if option_env!("API_BASE_URL").is_none() && option_env!("AUTH_STORAGE_KEY").is_none() {
            let config = AppConfig::from_env();
            assert_eq!(config.api_base_url, AppConfig::default().api_base_url);
            assert_eq!(config.storage_key, AppConfig::default().storage_key);
        }
    }
}
