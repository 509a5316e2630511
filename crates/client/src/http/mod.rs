//! Request dispatch over a shared `reqwest` connection pool.

mod context;
mod request;
mod response;

use std::time::Duration;

use reqwest::Method;
use url::Url;

pub use context::{CancelCause, RequestContext};
pub use request::Request;
pub use response::Response;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

const TCP_KEEPALIVE: Duration = Duration::from_secs(30);

/// Low-level Grafana client: base URL, optional bearer token and a pooled transport.
///
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    context: RequestContext,
}

impl RestClient {
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.timeout())
            .tcp_keepalive(TCP_KEEPALIVE)
            .danger_accept_invalid_certs(config.insecure_tls)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self::with_client(
            client,
            config.base_url.clone(),
            config.token.clone(),
        ))
    }

    /// Uses a transport configured by the caller, e.g. with default headers.
    pub fn with_client(client: reqwest::Client, base_url: Url, token: Option<String>) -> Self {
        Self {
            client,
            base_url,
            token: token.filter(|t| !t.is_empty()),
            context: RequestContext::default(),
        }
    }

    /// A client whose requests all carry `context`.
    pub fn with_context(&self, context: RequestContext) -> Self {
        Self {
            context,
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn request(&self, method: Method, prefix: &str) -> Request {
        Request::new(
            self.client.clone(),
            method,
            self.base_url.clone(),
            prefix,
            self.token.clone(),
            self.context.clone(),
        )
    }

    pub fn get(&self, prefix: &str) -> Request {
        self.request(Method::GET, prefix)
    }

    pub fn post(&self, prefix: &str) -> Request {
        self.request(Method::POST, prefix)
    }

    pub fn put(&self, prefix: &str) -> Request {
        self.request(Method::PUT, prefix)
    }

    pub fn patch(&self, prefix: &str) -> Request {
        self.request(Method::PATCH, prefix)
    }

    pub fn delete(&self, prefix: &str) -> Request {
        self.request(Method::DELETE, prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_keeps_base_path() {
        let config = ClientConfig::new("https://example.com/grafana").unwrap();
        let rest = RestClient::from_config(&config).unwrap();
        let url = rest
            .get("/api/teams")
            .sub_path("/:teamId")
            .path_param("teamId", 3)
            .url()
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/grafana/api/teams/3");
    }

    #[test]
    fn test_from_config_rejects_zero_timeout() {
        let config = ClientConfig::new("http://localhost:3000")
            .unwrap()
            .with_timeout_secs(0);
        assert!(matches!(
            RestClient::from_config(&config),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn test_builders_pick_method() {
        let rest = RestClient::with_client(
            reqwest::Client::new(),
            Url::parse("http://localhost:3000").unwrap(),
            None,
        );
        assert_eq!(*rest.get("/api").method(), Method::GET);
        assert_eq!(*rest.post("/api").method(), Method::POST);
        assert_eq!(*rest.put("/api").method(), Method::PUT);
        assert_eq!(*rest.patch("/api").method(), Method::PATCH);
        assert_eq!(*rest.delete("/api").method(), Method::DELETE);
    }

    #[test]
    fn test_empty_token_is_dropped() {
        let rest = RestClient::with_client(
            reqwest::Client::new(),
            Url::parse("http://localhost:3000").unwrap(),
            Some(String::new()),
        );
        assert_eq!(rest.token, None);
    }
}
