use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const CONFIG_PATH_ENV: &str = "SEISMOS_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory for the daily rolling log files
    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    /// Prepended to every entry link, and to `source_path` for the fetch
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_source_path")]
    pub source_path: String,

    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_base_url() -> String {
    "https://www.seismos.gr".to_string()
}

fn default_source_path() -> String {
    "/seismoi-lista".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("Mozilla/5.0 seismos-feed/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            base_url: default_base_url(),
            source_path: default_source_path(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `$SEISMOS_CONFIG` or `config.toml`; a missing file means defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        if Path::new(&path).exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn source_url(&self) -> String {
        format!("{}{}", self.base_url, self.source_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ServerConfig::from_toml("").unwrap();
        assert_eq!(config.server_address(), "0.0.0.0:8080");
        assert_eq!(config.source_url(), "https://www.seismos.gr/seismoi-lista");
        assert_eq!(config.fetch_timeout_secs, 30);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_config_overrides() {
        let config = ServerConfig::from_toml(
            r#"
            port = 9000
            base_url = "http://localhost:3000"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.source_url(), "http://localhost:3000/seismoi-lista");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(ServerConfig::from_toml("port = \"not a number\"").is_err());
        assert!(ServerConfig::from_file("/nonexistent/seismos/config.toml").is_err());
    }
}
