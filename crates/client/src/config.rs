use std::{env, path::Path, time::Duration};

use serde::Deserialize;
use url::Url;

use crate::error::{ClientError, Result};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings of a Grafana client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Grafana root URL, e.g. `https://grafana.example.com` or `https://example.com/grafana`.
    pub base_url: Url,
    /// Sent as `Authorization: Bearer <token>` when set.
    pub token: Option<String>,
    /// Skip TLS certificate verification (default: false)
    pub insecure_tls: bool,
    /// Connect and request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

/// On-disk form of [`ClientConfig`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct FileConfig {
    base_url: Option<String>,
    token: Option<String>,
    #[serde(default)]
    insecure_tls: bool,
    timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// A configuration for `base_url` with default settings.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            token: None,
            insecure_tls: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GRAFANA_URL` - Grafana root URL (default: "http://localhost:3000")
    /// - `GRAFANA_TOKEN` - API key or service account token (optional)
    /// - `GRAFANA_INSECURE_TLS` - `true` or `1` to skip certificate checks (default: false)
    /// - `GRAFANA_TIMEOUT_SECS` - Timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("GRAFANA_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let config = Self {
            base_url: parse_base_url(&base_url)?,
            token: env::var("GRAFANA_TOKEN").ok().filter(|t| !t.is_empty()),
            insecure_tls: env::var("GRAFANA_INSECURE_TLS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            timeout_secs: env::var("GRAFANA_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document with `base-url`, `token`, `insecure-tls` and `timeout-secs` keys.
    ///
    /// A missing `base-url` falls back to the default local Grafana.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: FileConfig =
            toml::from_str(content).map_err(|e| ClientError::Config(e.to_string()))?;
        let base_url = file.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let config = Self {
            base_url: parse_base_url(base_url)?,
            token: file.token.filter(|t| !t.is_empty()),
            insecure_tls: file.insecure_tls,
            timeout_secs: file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_insecure_tls(mut self, insecure_tls: bool) -> Self {
        self.insecure_tls = insecure_tls;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ClientError::Config(
                "timeout must be at least one second".to_string(),
            ));
        }
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "base URL '{}' must use http or https",
                self.base_url
            )));
        }
        Ok(())
    }
}

fn parse_base_url(value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| ClientError::Config(format!("invalid base URL '{value}': {e}")))?;
    if url.cannot_be_a_base() || !url.has_host() {
        return Err(ClientError::Config(format!(
            "base URL '{value}' must be an absolute URL with a host"
        )));
    }
    Ok(url)
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = ClientConfig::new("http://localhost:3000").unwrap();
        assert_eq!(config.token, None);
        assert!(!config.insecure_tls);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_relative_url_is_rejected() {
        assert!(matches!(
            ClientConfig::new("/api"),
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("mailto:admin@example.com"),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn test_from_toml_str() {
        let config = ClientConfig::from_toml_str(
            r#"
            base-url = "https://grafana.example.com/grafana"
            token = "glsa_abc"
            insecure-tls = true
            timeout-secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url.as_str(), "https://grafana.example.com/grafana");
        assert_eq!(config.token.as_deref(), Some("glsa_abc"));
        assert!(config.insecure_tls);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_from_toml_str_defaults() {
        let config = ClientConfig::from_toml_str("").unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:3000/");
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.insecure_tls);
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_keys_and_zero_timeout() {
        assert!(matches!(
            ClientConfig::from_toml_str("baseURL = \"http://x\""),
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_toml_str("timeout-secs = 0"),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn test_ftp_scheme_is_rejected() {
        let config = ClientConfig {
            base_url: Url::parse("ftp://example.com").unwrap(),
            token: None,
            insecure_tls: false,
            timeout_secs: 30,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE "));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::new("http://localhost:3000")
            .unwrap()
            .with_token("t")
            .with_insecure_tls(true)
            .with_timeout_secs(3);
        assert_eq!(config.token.as_deref(), Some("t"));
        assert!(config.insecure_tls);
        assert_eq!(config.timeout_secs, 3);
    }
}
