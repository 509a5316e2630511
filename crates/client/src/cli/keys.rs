//! API key CLI commands.

use clap::{Parser, Subcommand};
use grafana_core::types::RoleType;

/// API key management commands.
#[derive(Debug, Parser)]
pub struct KeysCommand {
    #[command(subcommand)]
    pub action: KeysAction,
}

/// Available API key actions.
#[derive(Debug, Subcommand)]
pub enum KeysAction {
    /// List API keys.
    List,
    /// Create a new API key.
    Create {
        /// Key name.
        #[arg(long)]
        name: String,
        /// Viewer, Editor or Admin.
        #[arg(long, default_value = "Viewer")]
        role: RoleType,
        /// Lifetime in seconds; the key never expires when omitted.
        #[arg(long)]
        seconds_to_live: Option<i64>,
    },
    /// Delete API key by ID.
    Delete {
        /// Key ID.
        id: i64,
    },
}
