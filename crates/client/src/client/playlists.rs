use grafana_core::query::PlaylistQuery;
use grafana_core::types::{Playlist, PlaylistDashboard, PlaylistItem, SimplePlaylist};

use crate::error::Result;
use crate::http::RestClient;

const PLAYLIST_API: &str = "/api/playlists";

/// Playlist operations under `/api/playlists`.
#[derive(Debug, Clone, Copy)]
pub struct Playlists<'a> {
    rest: &'a RestClient,
}

impl<'a> Playlists<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn search(&self, query: &PlaylistQuery) -> Result<Vec<SimplePlaylist>> {
        self.rest.get(PLAYLIST_API).query(query).fetch().await
    }

    pub async fn create(&self, playlist: &Playlist) -> Result<SimplePlaylist> {
        self.rest.post(PLAYLIST_API).json(playlist).fetch().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Playlist> {
        self.rest
            .get(PLAYLIST_API)
            .sub_path("/:id")
            .path_param("id", id)
            .fetch()
            .await
    }

    pub async fn items(&self, id: i64) -> Result<Vec<PlaylistItem>> {
        self.rest
            .get(PLAYLIST_API)
            .sub_path("/:id/items")
            .path_param("id", id)
            .fetch()
            .await
    }

    /// Dashboards the playlist resolves to, in play order.
    pub async fn dashboards(&self, id: i64) -> Result<Vec<PlaylistDashboard>> {
        self.rest
            .get(PLAYLIST_API)
            .sub_path("/:id/dashboards")
            .path_param("id", id)
            .fetch()
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.rest
            .delete(PLAYLIST_API)
            .sub_path("/:id")
            .path_param("id", id)
            .execute()
            .await
    }

    pub async fn update(&self, id: i64, playlist: &Playlist) -> Result<Playlist> {
        self.rest
            .put(PLAYLIST_API)
            .sub_path("/:id")
            .path_param("id", id)
            .json(playlist)
            .fetch()
            .await
    }
}
