//! Typed Grafana API client.
//!
//! [`GrafanaClient`] hands out one borrowed wrapper per resource group. Every
//! wrapper method sends exactly one request.

pub mod admin;
pub mod alert_notifications;
pub mod alerts;
pub mod annotations;
pub mod current_org;
pub mod current_user;
pub mod dashboards;
pub mod datasources;
pub mod folders;
pub mod keys;
pub mod orgs;
pub mod playlists;
pub mod search;
pub mod snapshots;
pub mod teams;
pub mod users;

use url::Url;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{RequestContext, RestClient};

pub use admin::Admin;
pub use alert_notifications::AlertNotifications;
pub use alerts::Alerts;
pub use annotations::Annotations;
pub use current_org::CurrentOrg;
pub use current_user::CurrentUser;
pub use dashboards::Dashboards;
pub use datasources::DataSources;
pub use folders::Folders;
pub use keys::Keys;
pub use orgs::Orgs;
pub use playlists::Playlists;
pub use search::Search;
pub use snapshots::Snapshots;
pub use teams::Teams;
pub use users::Users;

/// HTTP client for the Grafana API.
#[derive(Debug, Clone)]
pub struct GrafanaClient {
    rest: RestClient,
}

impl GrafanaClient {
    /// Create a new client from a configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::from_rest(RestClient::from_config(config)?))
    }

    /// Create from environment (see [`ClientConfig::from_env`]).
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn from_rest(rest: RestClient) -> Self {
        Self { rest }
    }

    /// The underlying dispatcher, for endpoints without a wrapper.
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    pub fn base_url(&self) -> &Url {
        self.rest.base_url()
    }

    /// A client whose every request carries `context`.
    pub fn with_context(&self, context: RequestContext) -> Self {
        Self::from_rest(self.rest.with_context(context))
    }

    pub fn admin(&self) -> Admin<'_> {
        Admin::new(&self.rest)
    }

    pub fn alerts(&self) -> Alerts<'_> {
        Alerts::new(&self.rest)
    }

    pub fn alert_notifications(&self) -> AlertNotifications<'_> {
        AlertNotifications::new(&self.rest)
    }

    pub fn annotations(&self) -> Annotations<'_> {
        Annotations::new(&self.rest)
    }

    /// Operations on the user the token belongs to.
    pub fn current_user(&self) -> CurrentUser<'_> {
        CurrentUser::new(&self.rest)
    }

    /// Operations on the organization the token is acting in.
    pub fn current_org(&self) -> CurrentOrg<'_> {
        CurrentOrg::new(&self.rest)
    }

    pub fn dashboards(&self) -> Dashboards<'_> {
        Dashboards::new(&self.rest)
    }

    pub fn datasources(&self) -> DataSources<'_> {
        DataSources::new(&self.rest)
    }

    pub fn folders(&self) -> Folders<'_> {
        Folders::new(&self.rest)
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys::new(&self.rest)
    }

    pub fn orgs(&self) -> Orgs<'_> {
        Orgs::new(&self.rest)
    }

    pub fn playlists(&self) -> Playlists<'_> {
        Playlists::new(&self.rest)
    }

    pub fn search(&self) -> Search<'_> {
        Search::new(&self.rest)
    }

    pub fn snapshots(&self) -> Snapshots<'_> {
        Snapshots::new(&self.rest)
    }

    pub fn teams(&self) -> Teams<'_> {
        Teams::new(&self.rest)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(&self.rest)
    }
}
