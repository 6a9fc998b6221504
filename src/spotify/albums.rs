use crate::{spotify::Catalog, types::AlbumDetail};

impl Catalog {
    /// Retrieves album details, the source of a track's release date.
    ///
    /// Release dates carry the album's precision: `YYYY-MM-DD`, `YYYY-MM` or
    /// just `YYYY`.
    pub async fn album(&self, album_id: &str) -> Result<AlbumDetail, reqwest::Error> {
        self.get_json(&format!("/albums/{id}", id = album_id), &[])
            .await
    }
}
