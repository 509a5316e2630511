//! Administration CLI commands.

use clap::{Parser, Subcommand};

/// Server administration commands.
#[derive(Debug, Parser)]
pub struct AdminCommand {
    #[command(subcommand)]
    pub action: AdminAction,
}

/// Available administration actions.
#[derive(Debug, Subcommand)]
pub enum AdminAction {
    /// Show server-wide usage statistics.
    Stats,
}
