use crate::{spotify::Catalog, types::PlaylistTracksResponse};

/// Largest page the playlist tracks endpoint hands out.
pub const PLAYLIST_PAGE_LIMIT: u32 = 100;

const PLAYLIST_TRACK_FIELDS: &str = "items(track(id,name,artists(name),album(id,name))),next";

impl Catalog {
    /// Retrieves the first page of a playlist's tracks.
    ///
    /// Requests at most [`PLAYLIST_PAGE_LIMIT`] items and only the fields the
    /// dataset needs. Further pages are never fetched; `next` is kept in the
    /// response so the caller can tell that the playlist was truncated.
    ///
    /// Items whose `track` is `null` (removed or unavailable tracks) are
    /// returned as-is and skipped by the dataset builder.
    ///
    /// # Errors
    ///
    /// Network failures and non-2xx responses (unknown playlist, expired
    /// token) are returned as `reqwest::Error`.
    pub async fn playlist_tracks(
        &self,
        playlist_id: &str,
    ) -> Result<PlaylistTracksResponse, reqwest::Error> {
        let limit = PLAYLIST_PAGE_LIMIT.to_string();
        self.get_json(
            &format!("/playlists/{id}/tracks", id = playlist_id),
            &[("fields", PLAYLIST_TRACK_FIELDS), ("limit", &limit)],
        )
        .await
    }
}
