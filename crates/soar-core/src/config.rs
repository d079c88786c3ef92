//! Connection configuration
//!
//! Credentials and endpoint details live in a TOML file (the deployment's
//! `app.toml`) with environment variable overrides on top, so tasks never
//! prompt for secrets. Loading is explicit: the host reads the config once
//! and constructs the client from it.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file error: {0}")]
    FileError(String),
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
    #[error("Missing required setting: {0}")]
    MissingSetting(&'static str),
}

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub connection: ConnectionConfig,
}

/// Connection details for the case-management platform
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Platform hostname, no scheme
    pub host: String,
    pub port: u16,
    /// Organization handle the API keys are scoped to
    pub org: String,
    pub api_key_id: String,
    pub api_key_secret: String,
    pub verify_tls: bool,
    pub timeout_seconds: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 443,
            org: String::new(),
            api_key_id: String::new(),
            api_key_secret: String::new(),
            verify_tls: true,
            timeout_seconds: 30,
        }
    }
}

// Secrets stay out of logs and failure reports.
impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("org", &self.org)
            .field("api_key_id", &self.api_key_id)
            .field("api_key_secret", &"<redacted>")
            .field("verify_tls", &self.verify_tls)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl ConnectionConfig {
    /// Check that everything needed to authenticate is present
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::MissingSetting("host"));
        }
        if self.org.is_empty() {
            return Err(ConfigError::MissingSetting("org"));
        }
        if self.api_key_id.is_empty() {
            return Err(ConfigError::MissingSetting("api_key_id"));
        }
        if self.api_key_secret.is_empty() {
            return Err(ConfigError::MissingSetting("api_key_secret"));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Read configuration from a TOML file, then apply environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileError(format!("{}: {e}", path.as_ref().display())))?;
        let mut config: Self =
            toml::from_str(&raw).map_err(|e| ConfigError::FileError(e.to_string()))?;
        config.apply_env()?;
        Ok(config)
    }

    /// Build configuration from environment variables alone
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Apply `SOAR_*` environment overrides
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup, used directly by tests
    pub fn apply_env_from(
        &mut self,
        get: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = get("SOAR_HOST") {
            self.connection.host = host;
        }
        if let Some(port) = get("SOAR_PORT") {
            self.connection.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SOAR_PORT".into(),
                message: format!("not a port number: {port}"),
            })?;
        }
        if let Some(org) = get("SOAR_ORG") {
            self.connection.org = org;
        }
        if let Some(id) = get("SOAR_API_KEY_ID") {
            self.connection.api_key_id = id;
        }
        if let Some(secret) = get("SOAR_API_KEY_SECRET") {
            self.connection.api_key_secret = secret;
        }
        if let Some(verify) = get("SOAR_VERIFY_TLS") {
            self.connection.verify_tls = matches!(verify.as_str(), "true" | "1" | "yes");
        }
        if let Some(timeout) = get("SOAR_TIMEOUT_SECONDS") {
            self.connection.timeout_seconds =
                timeout.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "SOAR_TIMEOUT_SECONDS".into(),
                    message: format!("not a duration in seconds: {timeout}"),
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = ConnectionConfig::default();
        assert_eq!(config.port, 443);
        assert!(config.verify_tls);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_parse_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [connection]
            host = "cases.example.com"
            org = "SOC"
            api_key_id = "abc"
            api_key_secret = "def"
            verify_tls = false
            "#,
        )
        .unwrap();
        assert_eq!(config.connection.host, "cases.example.com");
        assert_eq!(config.connection.org, "SOC");
        assert_eq!(config.connection.port, 443);
        assert!(!config.connection.verify_tls);
        assert!(config.connection.validate().is_ok());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config: AppConfig = toml::from_str(
            r#"
            [connection]
            host = "cases.example.com"
            org = "SOC"
            api_key_id = "abc"
            api_key_secret = "def"
            "#,
        )
        .unwrap();
        let vars = env(&[("SOAR_HOST", "other.example.com"), ("SOAR_PORT", "8443")]);
        config.apply_env_from(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.connection.host, "other.example.com");
        assert_eq!(config.connection.port, 8443);
        // untouched settings survive
        assert_eq!(config.connection.org, "SOC");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut config = AppConfig::default();
        let vars = env(&[("SOAR_PORT", "not-a-port")]);
        let err = config.apply_env_from(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_validate_missing_credentials() {
        let config = ConnectionConfig {
            host: "cases.example.com".into(),
            org: "SOC".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingSetting("api_key_id"))
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ConnectionConfig {
            api_key_secret: "super-secret".into(),
            ..Default::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
