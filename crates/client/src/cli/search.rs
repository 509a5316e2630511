//! Search CLI arguments.

use clap::{Args, ValueEnum};
use grafana_core::query::SearchQuery;
use grafana_core::types::SearchType;

/// Search dashboards and folders.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search by title.
    pub query: Option<String>,
    /// Filter by tag; repeat for several.
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Only dashboards or only folders.
    #[arg(long = "type")]
    pub kind: Option<SearchKind>,
    /// Only starred dashboards.
    #[arg(long)]
    pub starred: bool,
    /// Maximum number of results.
    #[arg(long)]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SearchKind {
    Dashboard,
    Folder,
}

impl From<SearchKind> for SearchType {
    fn from(kind: SearchKind) -> Self {
        match kind {
            SearchKind::Dashboard => SearchType::Dashboard,
            SearchKind::Folder => SearchType::Folder,
        }
    }
}

impl SearchArgs {
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            query: self.query.clone(),
            tags: self.tags.clone(),
            kind: self.kind.map(Into::into),
            starred: self.starred,
            limit: self.limit,
            ..SearchQuery::default()
        }
    }
}
