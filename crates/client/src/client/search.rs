use grafana_core::query::SearchQuery;
use grafana_core::types::SearchResult;

use crate::error::Result;
use crate::http::RestClient;

const SEARCH_API: &str = "/api/search";

/// Dashboard and folder search.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    rest: &'a RestClient,
}

impl<'a> Search<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn query(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        self.rest.get(SEARCH_API).query(query).fetch().await
    }
}
