//! grafana_client - typed client and CLI for the Grafana HTTP API.
//!
//! ```no_run
//! # async fn run() -> grafana_client::Result<()> {
//! use grafana_client::{ClientConfig, GrafanaClient};
//! use grafana_core::query::TeamQuery;
//!
//! let config = ClientConfig::new("http://localhost:3000")?.with_token("glsa_...");
//! let client = GrafanaClient::new(&config)?;
//! let page = client.teams().search(&TeamQuery::default()).await?;
//! println!("{} teams", page.total_count);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod output;

pub use client::GrafanaClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use http::{CancelCause, RequestContext, RestClient};
