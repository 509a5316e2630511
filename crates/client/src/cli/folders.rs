//! Folder CLI commands.

use clap::{Parser, Subcommand};

/// Folder management commands.
#[derive(Debug, Parser)]
pub struct FoldersCommand {
    #[command(subcommand)]
    pub action: FoldersAction,
}

/// Available folder actions.
#[derive(Debug, Subcommand)]
pub enum FoldersAction {
    /// List folders.
    List {
        /// Maximum number of folders (default: 1000).
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get folder by UID.
    Get {
        /// Folder UID.
        uid: String,
    },
    /// Create a new folder.
    Create {
        /// Folder title.
        #[arg(long)]
        title: String,
        /// Folder UID, generated by Grafana when omitted.
        #[arg(long, default_value = "")]
        uid: String,
    },
    /// Delete folder by UID, with every dashboard in it.
    Delete {
        /// Folder UID.
        uid: String,
    },
}
