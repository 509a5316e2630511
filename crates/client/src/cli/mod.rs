//! CLI command definitions.

pub mod admin;
pub mod alerts;
pub mod datasources;
pub mod folders;
pub mod keys;
pub mod orgs;
pub mod search;
pub mod teams;
pub mod users;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::ClientConfig;
use crate::error::Result;

/// CLI client for the Grafana HTTP API.
#[derive(Debug, Parser)]
#[command(name = "grafana-client")]
#[command(about = "CLI client for the Grafana HTTP API", long_about = None)]
pub struct Cli {
    /// Grafana root URL. Overrides the config file.
    #[arg(long, env = "GRAFANA_URL")]
    pub base_url: Option<String>,

    /// API key or service account token.
    #[arg(long, env = "GRAFANA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Skip TLS certificate verification.
    #[arg(long)]
    pub insecure_tls: bool,

    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// TOML file with `base-url`, `token`, `insecure-tls` and `timeout-secs`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolve the client configuration: config file (or defaults), then flags and env.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match (&self.config, &self.base_url) {
            (Some(path), _) => ClientConfig::from_file(path)?,
            (None, Some(base_url)) => ClientConfig::new(base_url)?,
            (None, None) => ClientConfig::from_toml_str("")?,
        };
        if let (Some(_), Some(base_url)) = (&self.config, &self.base_url) {
            config.base_url = ClientConfig::new(base_url)?.base_url;
        }
        if let Some(token) = self.token.as_ref().filter(|t| !t.is_empty()) {
            config = config.with_token(token.as_str());
        }
        if self.insecure_tls {
            config = config.with_insecure_tls(true);
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config = config.with_timeout_secs(timeout_secs);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// User lookup.
    Users(users::UsersCommand),
    /// Team management.
    Teams(teams::TeamsCommand),
    /// Organization management.
    Orgs(orgs::OrgsCommand),
    /// Folder management.
    Folders(folders::FoldersCommand),
    /// Data source management.
    Datasources(datasources::DataSourcesCommand),
    /// API key management.
    Keys(keys::KeysCommand),
    /// Search dashboards and folders.
    Search(search::SearchArgs),
    /// Server administration.
    Admin(admin::AdminCommand),
    /// Legacy alerts.
    Alerts(alerts::AlertsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("grafana-client").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&[
            "--base-url",
            "https://grafana.example.com",
            "--token",
            "glsa_abc",
            "--timeout-secs",
            "5",
            "teams",
            "get",
            "3",
        ]);
        let config = cli.client_config().unwrap();
        assert_eq!(config.base_url.as_str(), "https://grafana.example.com/");
        assert_eq!(config.token.as_deref(), Some("glsa_abc"));
        assert_eq!(config.timeout_secs, 5);
        assert!(matches!(cli.command, Commands::Teams(_)));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let cli = parse(&["--base-url", "http://localhost:3000", "--timeout-secs", "0", "keys", "list"]);
        assert!(cli.client_config().is_err());
    }

    #[test]
    fn test_format_json() {
        let cli = parse(&["--base-url", "http://localhost:3000", "--format", "json", "admin", "stats"]);
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
