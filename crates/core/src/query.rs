//! Typed query parameters of the list and search endpoints.
//!
//! Unset fields add nothing to the query string; every element of a list field
//! adds one pair under the same key.

use crate::request::{QueryParams, QueryValues};
use crate::types::{AlertState, AnnotationType, PermissionName, SearchType};

/// Filters of `GET /api/annotations`. Times are epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationQuery {
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub user_id: Option<i64>,
    pub alert_id: Option<i64>,
    pub dashboard_id: Option<i64>,
    pub panel_id: Option<i64>,
    /// Grafana defaults to 100.
    pub limit: Option<i64>,
    pub kind: Option<AnnotationType>,
    pub tags: Vec<String>,
}

impl QueryParams for AnnotationQuery {
    fn to_query(&self) -> QueryValues {
        let mut values = QueryValues::new();
        values
            .append_opt("from", self.from)
            .append_opt("to", self.to)
            .append_opt("userId", self.user_id)
            .append_opt("alertId", self.alert_id)
            .append_opt("dashboardId", self.dashboard_id)
            .append_opt("panelId", self.panel_id)
            .append_opt("limit", self.limit)
            .append_opt("type", self.kind.map(|k| k.as_str()))
            .append_all("tags", self.tags.iter().map(String::as_str));
        values
    }
}

/// Filters of `GET /api/alerts`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertQuery {
    pub panel_id: Option<i64>,
    pub limit: Option<i64>,
    /// Alerts whose name is like this value.
    pub query: Option<String>,
    /// Alerts whose dashboard name is like this value.
    pub dashboard_query: Option<String>,
    pub states: Vec<AlertState>,
    pub dashboard_ids: Vec<i64>,
    pub folder_ids: Vec<i64>,
    /// Dashboards must carry every tag listed.
    pub dashboard_tags: Vec<String>,
}

impl QueryParams for AlertQuery {
    fn to_query(&self) -> QueryValues {
        let mut values = QueryValues::new();
        values
            .append_opt("panelId", self.panel_id)
            .append_opt("dashboardQuery", self.dashboard_query.as_deref())
            .append_opt("query", self.query.as_deref())
            .append_opt("limit", self.limit)
            .append_all("state", self.states.iter().map(AlertState::as_str))
            .append_all("dashboardId", self.dashboard_ids.iter().map(i64::to_string))
            .append_all("folderId", self.folder_ids.iter().map(i64::to_string))
            .append_all("dashboardTag", self.dashboard_tags.iter().map(String::as_str));
        values
    }
}

/// Paging and filter of the user listing and search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub per_page: Option<i64>,
    pub page: Option<i64>,
    /// Users whose name, login or email is like this value.
    pub query: Option<String>,
}

impl QueryParams for UserQuery {
    fn to_query(&self) -> QueryValues {
        let mut values = QueryValues::new();
        values
            .append_opt("page", self.page)
            .append_opt("perpage", self.per_page)
            .append_opt("query", self.query.as_deref());
        values
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamQuery {
    pub per_page: Option<i64>,
    pub page: Option<i64>,
    /// Teams whose name is like this value.
    pub query: Option<String>,
    /// The team with exactly this name.
    pub name: Option<String>,
}

impl QueryParams for TeamQuery {
    fn to_query(&self) -> QueryValues {
        let mut values = QueryValues::new();
        values
            .append_opt("perpage", self.per_page)
            .append_opt("name", self.name.as_deref())
            .append_opt("query", self.query.as_deref())
            .append_opt("page", self.page);
        values
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgQuery {
    pub query: Option<String>,
    pub name: Option<String>,
}

impl QueryParams for OrgQuery {
    fn to_query(&self) -> QueryValues {
        let mut values = QueryValues::new();
        values
            .append_opt("query", self.query.as_deref())
            .append_opt("name", self.name.as_deref());
        values
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistQuery {
    pub query: Option<String>,
    pub limit: Option<i64>,
}

impl QueryParams for PlaylistQuery {
    fn to_query(&self) -> QueryValues {
        let mut values = QueryValues::new();
        values
            .append_opt("query", self.query.as_deref())
            .append_opt("limit", self.limit);
        values
    }
}

/// Filters of `GET /api/search`.
///
/// `starred` is always sent, so a default query asks for unstarred and starred
/// dashboards alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search by title.
    pub query: Option<String>,
    pub tags: Vec<String>,
    pub kind: Option<SearchType>,
    pub dashboard_ids: Vec<i64>,
    pub folder_ids: Vec<i64>,
    pub starred: bool,
    pub limit: Option<i64>,
    pub permission: Option<PermissionName>,
}

impl QueryParams for SearchQuery {
    fn to_query(&self) -> QueryValues {
        let mut values = QueryValues::new();
        values
            .append_opt("query", self.query.as_deref())
            .append_all("tag", self.tags.iter().map(String::as_str))
            .append_opt("type", self.kind.map(|k| k.as_str()))
            .append_all("dashboardIds", self.dashboard_ids.iter().map(i64::to_string))
            .append_all("folderIds", self.folder_ids.iter().map(i64::to_string))
            .append("starred", self.starred.to_string())
            .append_opt("limit", self.limit)
            .append_opt("permission", self.permission.map(|p| p.as_str()));
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(values: &QueryValues) -> Vec<(String, String)> {
        values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_annotation_query_all_parameters() {
        let query = AnnotationQuery {
            alert_id: Some(4532185),
            kind: Some(AnnotationType::Alert),
            dashboard_id: Some(48653231),
            from: Some(1558256013),
            limit: Some(10),
            panel_id: Some(456321),
            tags: vec!["my".into(), "test".into(), "tag".into()],
            to: Some(1558256013),
            user_id: Some(45328),
        };
        assert_eq!(
            query.to_query().encode(),
            "alertId=4532185&dashboardId=48653231&from=1558256013&limit=10&panelId=456321\
             &tags=my&tags=test&tags=tag&to=1558256013&type=alert&userId=45328"
        );
    }

    #[test]
    fn test_alert_query_all_parameters() {
        let query = AlertQuery {
            panel_id: Some(456321),
            limit: Some(10),
            query: Some("my-query".into()),
            dashboard_query: Some("dashboard-name".into()),
            states: vec![AlertState::Ok, AlertState::Alerting],
            dashboard_ids: vec![56432, 156584],
            folder_ids: vec![79665, 112321, 887543],
            dashboard_tags: vec!["my".into(), "test".into(), "tag".into()],
        };
        let values = query.to_query();
        assert_eq!(values.get("state").unwrap(), ["ok", "alerting"]);
        assert_eq!(values.get("dashboardId").unwrap(), ["56432", "156584"]);
        assert_eq!(values.get("folderId").unwrap(), ["79665", "112321", "887543"]);
        assert_eq!(values.get("dashboardTag").unwrap(), ["my", "test", "tag"]);
        assert_eq!(values.get("dashboardQuery").unwrap(), ["dashboard-name"]);
        assert_eq!(values.get("query").unwrap(), ["my-query"]);
        assert_eq!(values.get("panelId").unwrap(), ["456321"]);
        assert_eq!(values.get("limit").unwrap(), ["10"]);
    }

    #[test]
    fn test_empty_queries_emit_nothing() {
        assert!(AnnotationQuery::default().to_query().is_empty());
        assert!(AlertQuery::default().to_query().is_empty());
        assert!(UserQuery::default().to_query().is_empty());
        assert!(TeamQuery::default().to_query().is_empty());
        assert!(OrgQuery::default().to_query().is_empty());
        assert!(PlaylistQuery::default().to_query().is_empty());
    }

    #[test]
    fn test_search_always_sends_starred() {
        assert_eq!(SearchQuery::default().to_query().encode(), "starred=false");
    }

    #[test]
    fn test_search_query_all_parameters() {
        let query = SearchQuery {
            query: Some("prod".into()),
            tags: vec!["a".into(), "b".into()],
            kind: Some(SearchType::Folder),
            dashboard_ids: vec![1, 2],
            folder_ids: vec![3],
            starred: true,
            limit: Some(5),
            permission: Some(PermissionName::Edit),
        };
        assert_eq!(
            pairs(&query.to_query()),
            vec![
                ("dashboardIds".to_string(), "1".to_string()),
                ("dashboardIds".to_string(), "2".to_string()),
                ("folderIds".to_string(), "3".to_string()),
                ("limit".to_string(), "5".to_string()),
                ("permission".to_string(), "Edit".to_string()),
                ("query".to_string(), "prod".to_string()),
                ("starred".to_string(), "true".to_string()),
                ("tag".to_string(), "a".to_string()),
                ("tag".to_string(), "b".to_string()),
                ("type".to_string(), "dash-folder".to_string()),
            ]
        );
    }

    #[test]
    fn test_user_and_team_keys() {
        let users = UserQuery {
            per_page: Some(10),
            page: Some(2),
            query: Some("adm".into()),
        };
        assert_eq!(users.to_query().encode(), "page=2&perpage=10&query=adm");

        let teams = TeamQuery {
            name: Some("my team".into()),
            ..TeamQuery::default()
        };
        assert_eq!(teams.to_query().encode(), "name=my+team");
    }
}
