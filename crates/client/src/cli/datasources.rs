//! Data source CLI commands.

use clap::{Parser, Subcommand};

/// Data source management commands.
#[derive(Debug, Parser)]
pub struct DataSourcesCommand {
    #[command(subcommand)]
    pub action: DataSourcesAction,
}

/// Available data source actions.
#[derive(Debug, Subcommand)]
pub enum DataSourcesAction {
    /// List data sources.
    List,
    /// Get data source by ID.
    Get {
        /// Data source ID.
        id: i64,
    },
    /// Delete data source by ID.
    Delete {
        /// Data source ID.
        id: i64,
    },
}
