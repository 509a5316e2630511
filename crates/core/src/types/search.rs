use serde::{Deserialize, Serialize};

use crate::serde::deserialize_null_default;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchType {
    #[default]
    #[serde(rename = "dash-db")]
    Dashboard,
    #[serde(rename = "dash-folder")]
    Folder,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Dashboard => "dash-db",
            SearchType::Folder => "dash-folder",
        }
    }
}

/// A dashboard or folder matched by a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResult {
    pub id: i64,
    pub uid: String,
    pub title: String,
    pub uri: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: SearchType,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub tags: Vec<String>,
    pub is_starred: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_results() {
        let json = r#"[
            {"id":163,"uid":"000000163","title":"Folder","url":"/dashboards/f/000000163/folder",
             "type":"dash-folder","tags":[],"isStarred":false,"uri":"db/folder"},
            {"id":1,"uid":"cIBgcSjkk","title":"Production Overview","url":"/d/cIBgcSjkk/production-overview",
             "type":"dash-db","tags":["prod"],"isStarred":true,"folderId":2,"folderUid":"000000163",
             "folderTitle":"Folder","folderUrl":"/dashboards/f/000000163/folder"}
        ]"#;
        let results: Vec<SearchResult> = serde_json::from_str(json).unwrap();
        assert_eq!(results[0].kind, SearchType::Folder);
        assert_eq!(results[0].folder_id, None);
        assert_eq!(results[1].kind, SearchType::Dashboard);
        assert_eq!(results[1].folder_title.as_deref(), Some("Folder"));
        assert!(results[1].is_starred);
    }
}
