//! Alert CLI commands.

use clap::{Parser, Subcommand};
use grafana_core::types::AlertState;

/// Legacy alert commands.
#[derive(Debug, Parser)]
pub struct AlertsCommand {
    #[command(subcommand)]
    pub action: AlertsAction,
}

/// Available alert actions.
#[derive(Debug, Subcommand)]
pub enum AlertsAction {
    /// List alerts.
    List {
        /// Filter by state (ALL, no_data, paused, alerting, ok, pending); repeat for several.
        #[arg(long = "state")]
        states: Vec<AlertState>,
        /// Only alerts of this dashboard.
        #[arg(long)]
        dashboard_id: Option<i64>,
        /// Maximum number of alerts.
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Pause or resume an alert.
    Pause {
        /// Alert ID.
        id: i64,
        /// Resume instead of pausing.
        #[arg(long)]
        resume: bool,
    },
}
