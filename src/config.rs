//! Configuration handling for the TUI and the HTTP backend

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::gateway::DEFAULT_GATEWAY_URL;

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5173";
const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_COMPLETIONS_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_COMPLETIONS_MODEL: &str = "gpt-4o";
const DEFAULT_SHELL_COMMAND: &str = r#"echo "Hello from shell!""#;

/// User configuration. Every field is optional; accessors apply defaults
/// and environment overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Address `showcase serve` binds to
    pub server_address: Option<String>,
    /// Base URL the TUI posts form submissions to
    pub gateway_url: Option<String>,
    /// Seconds to wait for a submission; 0 waits forever
    pub submit_timeout_secs: Option<u64>,
    /// Chat completions API base URL
    pub completions_base_url: Option<String>,
    /// Chat completions model
    pub completions_model: Option<String>,
    /// Command run by the shell endpoint
    pub shell_command: Option<String>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "showcase", "showcase")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                info!("Loading config from {}", path.display());
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn server_address(&self) -> String {
        env_or("SHOWCASE_ADDRESS", self.server_address.as_deref(), DEFAULT_SERVER_ADDRESS)
    }

    pub fn gateway_url(&self) -> String {
        env_or("SHOWCASE_GATEWAY_URL", self.gateway_url.as_deref(), DEFAULT_GATEWAY_URL)
    }

    /// Submission timeout, `None` when disabled
    pub fn submit_timeout(&self) -> Option<Duration> {
        match self.submit_timeout_secs.unwrap_or(DEFAULT_SUBMIT_TIMEOUT_SECS) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn completions_base_url(&self) -> String {
        self.completions_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_COMPLETIONS_BASE_URL.to_string())
    }

    pub fn completions_model(&self) -> String {
        self.completions_model
            .clone()
            .unwrap_or_else(|| DEFAULT_COMPLETIONS_MODEL.to_string())
    }

    pub fn shell_command(&self) -> String {
        self.shell_command
            .clone()
            .unwrap_or_else(|| DEFAULT_SHELL_COMMAND.to_string())
    }

    /// API key for the completions proxy, only ever read from the environment
    pub fn completions_api_key() -> Option<String> {
        std::env::var("OPENAI_API_KEY").ok().filter(|key| !key.is_empty())
    }
}

fn env_or(key: &str, configured: Option<&str>, default: &str) -> String {
    if let Ok(value) = std::env::var(key) {
        debug!("{key} set, overriding config");
        return value;
    }
    configured.unwrap_or(default).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.server_address.is_none());
        assert!(config.gateway_url.is_none());
        assert!(config.submit_timeout_secs.is_none());
        assert!(config.completions_base_url.is_none());
        assert!(config.completions_model.is_none());
        assert!(config.shell_command.is_none());
    }

    #[test]
    fn test_default_accessors() {
        let config = AppConfig::default();
        assert_eq!(config.submit_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.completions_model(), "gpt-4o");
        assert_eq!(config.completions_base_url(), "https://api.openai.com/v1");
        assert_eq!(config.shell_command(), r#"echo "Hello from shell!""#);
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config = AppConfig {
            submit_timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.submit_timeout(), None);
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            server_address: Some("0.0.0.0:8080".to_string()),
            gateway_url: Some("http://localhost:8080".to_string()),
            submit_timeout_secs: Some(5),
            completions_base_url: None,
            completions_model: Some("gpt-4o-mini".to_string()),
            shell_command: Some("uname -a".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.server_address, Some("0.0.0.0:8080".to_string()));
        assert_eq!(parsed.submit_timeout_secs, Some(5));
        assert_eq!(parsed.completions_model(), "gpt-4o-mini");
        assert_eq!(parsed.shell_command(), "uname -a");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.gateway_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"submit_timeout_secs": 10, "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.submit_timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_env_or_prefers_configured_over_default() {
        let value = env_or(
            "SHOWCASE_TEST_UNSET_VARIABLE",
            Some("configured"),
            "default",
        );
        assert_eq!(value, "configured");
        assert_eq!(
            env_or("SHOWCASE_TEST_UNSET_VARIABLE", None, "default"),
            "default"
        );
    }

    #[test]
    fn test_load_returns_ok() {
        let result = AppConfig::load();
        assert!(result.is_ok());
    }
}
