//! Assembly of the per-track dataset.
//!
//! A playlist page is turned into one [`TrackRecord`] per available track.
//! Each track needs three more lookups (audio features, album, track detail);
//! every lookup is optional and a failure only blanks the fields it feeds.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res, SporecError,
    spotify::Catalog,
    types::{AlbumDetail, AudioFeatures, PlaylistTrack, TrackDetail, TrackRecord},
    warning,
};

impl TrackRecord {
    /// Merges a playlist entry with the results of its lookups.
    pub fn from_parts(
        track: PlaylistTrack,
        features: Option<AudioFeatures>,
        album: Option<AlbumDetail>,
        detail: Option<TrackDetail>,
    ) -> Self {
        let artists = track
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let features = features.unwrap_or_default();

        TrackRecord {
            track_name: track.name,
            artists,
            album_name: track.album.name,
            album_id: track.album.id,
            track_id: track.id,
            popularity: detail.and_then(|d| d.popularity),
            release_date: album.and_then(|a| a.release_date),
            duration_ms: features.duration_ms,
            danceability: features.danceability,
            energy: features.energy,
            key: features.key,
            loudness: features.loudness,
            mode: features.mode,
            speechiness: features.speechiness,
            acousticness: features.acousticness,
            instrumentalness: features.instrumentalness,
            liveness: features.liveness,
            valence: features.valence,
            tempo: features.tempo,
        }
    }
}

/// Builds the dataset for a playlist, one record per track in playlist order.
///
/// Only the first page of the playlist is read. Entries whose track is
/// `null` are skipped. For every remaining track the audio features, the
/// album and the track detail are fetched one after another; a lookup whose
/// id is absent is not issued at all.
///
/// # Errors
///
/// Only a failure of the playlist request itself is returned. Lookup failures
/// are reported as warnings and leave the corresponding fields empty.
///
/// # Example
///
/// ```
/// let records = build_dataset(&catalog, "37i9dQZF1DXcBWIGoYBM5M").await?;
/// println!("{} tracks", records.len());
/// ```
pub async fn build_dataset(catalog: &Catalog, playlist_id: &str) -> Res<Vec<TrackRecord>> {
    let page = catalog.playlist_tracks(playlist_id).await?;
    if page.next.is_some() {
        warning!(
            "Playlist {} has more than {} tracks; only the first page is used.",
            playlist_id,
            page.items.len()
        );
    }

    let tracks: Vec<PlaylistTrack> = page.items.into_iter().filter_map(|i| i.track).collect();
    let tracks_total = tracks.len();

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching track details...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut records = Vec::with_capacity(tracks_total);
    for (tracks_count, track) in tracks.into_iter().enumerate() {
        pb.set_message(format!(
            "Fetching details for {track_name} ({tracks_count}/{tracks_total})",
            track_name = track.name,
            tracks_count = tracks_count + 1,
            tracks_total = tracks_total
        ));

        let features = match track.id.as_deref() {
            Some(id) => absorb(&pb, catalog.audio_features(id).await, "audio features", id),
            None => None,
        };
        let album = match track.album.id.as_deref() {
            Some(id) => absorb(&pb, catalog.album(id).await.map(Some), "album", id),
            None => None,
        };
        let detail = match track.id.as_deref() {
            Some(id) => absorb(&pb, catalog.track(id).await.map(Some), "track", id),
            None => None,
        };

        records.push(TrackRecord::from_parts(track, features, album, detail));
    }

    pb.finish_and_clear();
    Ok(records)
}

fn absorb<T>(
    pb: &ProgressBar,
    result: Result<Option<T>, reqwest::Error>,
    lookup: &str,
    id: &str,
) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(e) => {
            let missing = SporecError::MissingData(format!("{} for {}: {}", lookup, id, e));
            pb.suspend(|| warning!("{}", missing));
            None
        }
    }
}
