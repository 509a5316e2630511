use serde::{Deserialize, Serialize};

use crate::serde::deserialize_null_default;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaylistItemType {
    #[default]
    DashboardById,
    DashboardByTag,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplePlaylist {
    pub id: i64,
    pub name: String,
    pub interval: String,
}

/// A playlist with its items. `interval` uses Grafana durations such as `5m`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playlist {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    pub name: String,
    pub interval: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistItem {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(rename = "playlistid", skip_serializing_if = "is_zero")]
    pub playlist_id: i64,
    #[serde(rename = "type")]
    pub kind: PlaylistItemType,
    pub title: String,
    /// A dashboard id or a tag, depending on `kind`.
    pub value: String,
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistDashboard {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub uri: String,
    pub order: i64,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_playlist_has_no_ids() {
        let playlist = Playlist {
            name: "my playlist".to_string(),
            interval: "5m".to_string(),
            items: vec![PlaylistItem {
                kind: PlaylistItemType::DashboardByTag,
                value: "myTag".to_string(),
                order: 1,
                title: "my tag".to_string(),
                ..PlaylistItem::default()
            }],
            ..Playlist::default()
        };
        assert_eq!(
            serde_json::to_string(&playlist).unwrap(),
            r#"{"name":"my playlist","interval":"5m","items":[{"type":"dashboard_by_tag","title":"my tag","value":"myTag","order":1}]}"#
        );
    }

    #[test]
    fn test_item_playlist_id_key() {
        let json = r#"{"id":1,"playlistid":1,"type":"dashboard_by_id","title":"x","value":"3","order":1}"#;
        let item: PlaylistItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.playlist_id, 1);
        assert_eq!(item.kind, PlaylistItemType::DashboardById);
    }
}
