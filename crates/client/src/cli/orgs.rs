//! Organization CLI commands.

use clap::{Parser, Subcommand};

/// Organization management commands.
#[derive(Debug, Parser)]
pub struct OrgsCommand {
    #[command(subcommand)]
    pub action: OrgsAction,
}

/// Available organization actions.
#[derive(Debug, Subcommand)]
pub enum OrgsAction {
    /// List organizations.
    List {
        /// Filter by name.
        #[arg(long)]
        query: Option<String>,
    },
    /// Get organization by ID.
    Get {
        /// Organization ID.
        id: i64,
    },
    /// Create a new organization.
    Create {
        /// Organization name.
        name: String,
    },
    /// Delete organization by ID.
    Delete {
        /// Organization ID.
        id: i64,
    },
}
