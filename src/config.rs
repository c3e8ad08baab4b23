//! Configuration handling for the form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Collector URL used when nothing else is configured
pub const DEFAULT_COLLECTOR_URL: &str = "https://dev.sundev.ovh/api/v1/crm/forms/8";

/// Environment variable that overrides the collector URL
pub const COLLECTOR_URL_ENV: &str = "CRM_FORM_COLLECTOR_URL";

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Collector endpoint submissions are posted to
    pub collector_url: Option<String>,
    /// Request timeout in seconds; unset means no timeout
    pub request_timeout_secs: Option<u64>,
}

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("ovh", "sundev", "crm-form")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("crm-form.log"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };

        if let Ok(url) = std::env::var(COLLECTOR_URL_ENV) {
            if !url.trim().is_empty() {
                config.collector_url = Some(url);
            }
        }

        Ok(config)
    }

    fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// The collector URL to post to
    pub fn collector_url(&self) -> String {
        self.collector_url
            .clone()
            .unwrap_or_else(|| DEFAULT_COLLECTOR_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.collector_url.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert_eq!(config.collector_url(), DEFAULT_COLLECTOR_URL);
    }

    #[test]
    fn test_configured_url_wins() {
        let config = FormConfig {
            collector_url: Some("http://localhost:8080/forms/8".to_string()),
            ..Default::default()
        };
        assert_eq!(config.collector_url(), "http://localhost:8080/forms/8");
    }

    #[test]
    fn test_serialization() {
        let config = FormConfig {
            collector_url: Some("http://localhost:8080".to_string()),
            request_timeout_secs: Some(10),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.collector_url,
            Some("http://localhost:8080".to_string())
        );
        assert_eq!(parsed.request_timeout_secs, Some(10));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.collector_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"request_timeout_secs": 5, "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.request_timeout_secs, Some(5));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "crm-form-config-test-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"collector_url": "http://127.0.0.1:9000/"}"#).unwrap();

        let config = FormConfig::load_from(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.collector_url(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn test_load_from_malformed_file_fails() {
        let path = std::env::temp_dir().join(format!(
            "crm-form-config-bad-{}.json",
            std::process::id()
        ));
        fs::write(&path, "not json").unwrap();

        let result = FormConfig::load_from(&path);
        fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn test_load_returns_ok_when_no_file() {
        // Load should succeed whether or not a config file exists
        assert!(FormConfig::load().is_ok());
    }
}
