use grafana_core::request::{build_url, PathParams, QueryParams, QueryValues};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::context::RequestContext;
use super::response::Response;
use crate::error::{ClientError, Result};

const APPLICATION_JSON: &str = "application/json";

/// One request to Grafana, described then sent once.
#[derive(Debug)]
pub struct Request {
    client: reqwest::Client,
    method: Method,
    base_url: Url,
    prefix: String,
    sub_path: String,
    path_params: PathParams,
    query: QueryValues,
    body: Option<Vec<u8>>,
    body_error: Option<serde_json::Error>,
    token: Option<String>,
    context: RequestContext,
}

impl Request {
    pub(crate) fn new(
        client: reqwest::Client,
        method: Method,
        base_url: Url,
        prefix: &str,
        token: Option<String>,
        context: RequestContext,
    ) -> Self {
        Self {
            client,
            method,
            base_url,
            prefix: prefix.to_string(),
            sub_path: String::new(),
            path_params: PathParams::new(),
            query: QueryValues::new(),
            body: None,
            body_error: None,
            token,
            context,
        }
    }

    /// Sets the sub-path template, e.g. `/:teamId/members`.
    pub fn sub_path(mut self, template: &str) -> Self {
        self.sub_path = template.to_string();
        self
    }

    /// Sets the value of a sub-path placeholder; the last value set wins.
    pub fn path_param(mut self, name: &str, value: impl ToString) -> Self {
        self.path_params.set(name, value.to_string());
        self
    }

    pub fn query_param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.append(key, value.to_string());
        self
    }

    /// Adds every pair of a typed parameter set.
    pub fn query(mut self, params: &impl QueryParams) -> Self {
        self.query.extend(params.to_query());
        self
    }

    /// Sets a JSON body. An encoding failure is reported by [`Request::send`].
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_json::to_vec(body) {
            Ok(bytes) => {
                self.body = Some(bytes);
                self.body_error = None;
            }
            Err(err) => {
                self.body = None;
                self.body_error = Some(err);
            }
        }
        self
    }

    pub fn context(mut self, context: RequestContext) -> Self {
        self.context = context;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The URL the request would be sent to.
    pub fn url(&self) -> Result<Url> {
        Ok(build_url(
            &self.base_url,
            &self.prefix,
            &self.sub_path,
            &self.path_params,
            &self.query,
        )?)
    }

    /// Sends the request and reads the whole response body.
    ///
    /// Nothing is sent when the body could not be encoded, the URL cannot be
    /// built or the context has already fired. Non-success statuses are returned
    /// as a [`Response`]; see [`Response::error_for_status`].
    pub async fn send(self) -> Result<Response> {
        if let Some(err) = self.body_error {
            return Err(ClientError::Serialize(err));
        }
        let url = self.url()?;
        if let Some(cause) = self.context.check() {
            return Err(ClientError::Cancelled(cause));
        }

        let mut builder = self
            .client
            .request(self.method.clone(), url.clone())
            .header(ACCEPT, APPLICATION_JSON);
        if let Some(body) = self.body {
            builder = builder.header(CONTENT_TYPE, APPLICATION_JSON).body(body);
        }
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        tracing::debug!(method = %self.method, url = %url, "sending request to Grafana");

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(Response::new(status, body.to_vec()))
        };

        let result = tokio::select! {
            biased;
            cause = self.context.done() => return Err(ClientError::Cancelled(cause)),
            result = exchange => result,
        };

        match result {
            Ok(response) => {
                tracing::debug!(
                    status = response.status(),
                    bytes = response.body().len(),
                    "received response from Grafana"
                );
                Ok(response)
            }
            Err(err) => match self.context.check() {
                Some(cause) => Err(ClientError::Cancelled(cause)),
                None => Err(ClientError::Transport(err)),
            },
        }
    }

    /// Sends the request and decodes the success body; an empty body gives `T::default()`.
    pub async fn fetch<T: DeserializeOwned + Default>(self) -> Result<T> {
        self.send().await?.json()
    }

    /// Sends the request and only checks the status.
    pub async fn execute(self) -> Result<()> {
        self.send().await?.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grafana_core::query::SearchQuery;

    fn request(method: Method, prefix: &str) -> Request {
        Request::new(
            reqwest::Client::new(),
            method,
            Url::parse("http://localhost:8080").unwrap(),
            prefix,
            None,
            RequestContext::new(),
        )
    }

    #[test]
    fn test_url_with_params_and_query() {
        let request = request(Method::GET, "/api")
            .sub_path("/dasboard/:dashboardID/snapshot")
            .path_param("dashboardID", 15)
            .query_param("tags", "tag1")
            .query_param("tags", "tag2")
            .query_param("limit", 100);
        assert_eq!(
            request.url().unwrap().as_str(),
            "http://localhost:8080/api/dasboard/15/snapshot?limit=100&tags=tag1&tags=tag2"
        );
    }

    #[test]
    fn test_path_param_last_write_wins() {
        let request = request(Method::DELETE, "/api/teams")
            .sub_path("/:teamId")
            .path_param("teamId", 1)
            .path_param("teamId", 2);
        assert_eq!(
            request.url().unwrap().as_str(),
            "http://localhost:8080/api/teams/2"
        );
    }

    #[test]
    fn test_typed_query_is_merged() {
        let request = request(Method::GET, "/api/search")
            .query_param("limit", 1)
            .query(&SearchQuery::default());
        assert_eq!(
            request.url().unwrap().as_str(),
            "http://localhost:8080/api/search?limit=1&starred=false"
        );
    }

    #[test]
    fn test_unresolved_placeholder_is_a_build_error() {
        let error = request(Method::GET, "/api/teams")
            .sub_path("/:teamId/members")
            .url()
            .unwrap_err();
        assert!(matches!(error, ClientError::Build(_)));
    }

    #[test]
    fn test_unserializable_body_is_kept_for_send() {
        let mut body = std::collections::HashMap::new();
        body.insert((1, 2), "tuple keys cannot be JSON object keys");
        let request = request(Method::POST, "/api/teams").json(&body);
        assert!(request.body.is_none());
        assert!(request.body_error.is_some());
    }

    #[tokio::test]
    async fn test_serialize_error_is_reported_before_sending() {
        let mut body = std::collections::HashMap::new();
        body.insert((1, 2), "x");
        let error = request(Method::POST, "/api/teams")
            .json(&body)
            .send()
            .await
            .unwrap_err();
        assert!(matches!(error, ClientError::Serialize(_)));
    }

    #[tokio::test]
    async fn test_build_error_is_reported_before_sending() {
        let error = request(Method::GET, "/api/teams")
            .sub_path("/:teamId")
            .send()
            .await
            .unwrap_err();
        assert!(matches!(error, ClientError::Build(_)));
    }
}
