//! Team CLI commands.

use clap::{Parser, Subcommand};

/// Team management commands.
#[derive(Debug, Parser)]
pub struct TeamsCommand {
    #[command(subcommand)]
    pub action: TeamsAction,
}

/// Available team actions.
#[derive(Debug, Subcommand)]
pub enum TeamsAction {
    /// Search teams.
    Search {
        /// Filter by team name.
        #[arg(long)]
        query: Option<String>,
        /// Exact team name.
        #[arg(long)]
        name: Option<String>,
        /// Page number, starting at 1.
        #[arg(long)]
        page: Option<i64>,
        /// Teams per page.
        #[arg(long)]
        per_page: Option<i64>,
    },
    /// Get team by ID.
    Get {
        /// Team ID.
        id: i64,
    },
    /// List team members.
    Members {
        /// Team ID.
        id: i64,
    },
    /// Create a new team.
    Create {
        /// Team name.
        #[arg(long)]
        name: String,
        /// Team email.
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Delete team by ID.
    Delete {
        /// Team ID.
        id: i64,
    },
    /// Add a user to a team.
    AddMember {
        /// Team ID.
        team_id: i64,
        /// User ID.
        user_id: i64,
    },
    /// Remove a user from a team.
    RemoveMember {
        /// Team ID.
        team_id: i64,
        /// User ID.
        user_id: i64,
    },
}
