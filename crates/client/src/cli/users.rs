//! User CLI commands.

use clap::{Parser, Subcommand};

/// User lookup commands.
#[derive(Debug, Parser)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Available user actions.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// List users.
    List {
        /// Filter by login, email or name.
        #[arg(long)]
        query: Option<String>,
        /// Page number, starting at 1.
        #[arg(long)]
        page: Option<i64>,
        /// Users per page.
        #[arg(long)]
        per_page: Option<i64>,
    },
    /// Get user by ID.
    Get {
        /// User ID.
        id: i64,
    },
    /// Find a user by login or email.
    Lookup {
        /// Login or email.
        login_or_email: String,
    },
    /// List the organizations of a user.
    Orgs {
        /// User ID.
        id: i64,
    },
}
