use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

// Local files and unavailable entries may carry `null` names; they render
// as empty cells instead of failing the whole page.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioFeatures {
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub danceability: Option<f64>,
    #[serde(default)]
    pub energy: Option<f64>,
    #[serde(default)]
    pub key: Option<f64>,
    #[serde(default)]
    pub loudness: Option<f64>,
    #[serde(default)]
    pub mode: Option<f64>,
    #[serde(default)]
    pub speechiness: Option<f64>,
    #[serde(default)]
    pub acousticness: Option<f64>,
    #[serde(default)]
    pub instrumentalness: Option<f64>,
    #[serde(default)]
    pub liveness: Option<f64>,
    #[serde(default)]
    pub valence: Option<f64>,
    #[serde(default)]
    pub tempo: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDetail {
    pub id: String,
    #[serde(default)]
    pub popularity: Option<u32>,
}

/// One row of the dataset: a playlist track merged with its lookups.
///
/// Every field fed by a catalog lookup is optional; a failed lookup leaves
/// only its own fields empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub track_name: String,
    pub artists: String,
    pub album_name: String,
    pub album_id: Option<String>,
    pub track_id: Option<String>,
    pub popularity: Option<u32>,
    pub release_date: Option<String>,
    pub duration_ms: Option<u64>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub key: Option<f64>,
    pub loudness: Option<f64>,
    pub mode: Option<f64>,
    pub speechiness: Option<f64>,
    pub acousticness: Option<f64>,
    pub instrumentalness: Option<f64>,
    pub liveness: Option<f64>,
    pub valence: Option<f64>,
    pub tempo: Option<f64>,
}

/// Projection of a [`TrackRecord`] returned by the recommenders.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub track_name: String,
    pub artists: String,
    pub album_name: String,
    pub release_date: Option<String>,
    pub popularity: Option<u32>,
}

impl From<&TrackRecord> for Recommendation {
    fn from(record: &TrackRecord) -> Self {
        Recommendation {
            track_name: record.track_name.clone(),
            artists: record.artists.clone(),
            album_name: record.album_name.clone(),
            release_date: record.release_date.clone(),
            popularity: record.popularity,
        }
    }
}

#[derive(Tabled)]
pub struct RecommendationTableRow {
    #[tabled(rename = "Track Name")]
    pub track_name: String,
    #[tabled(rename = "Artists")]
    pub artists: String,
    #[tabled(rename = "Album Name")]
    pub album_name: String,
    #[tabled(rename = "Release Date")]
    pub release_date: String,
    #[tabled(rename = "Popularity")]
    pub popularity: String,
}

impl From<Recommendation> for RecommendationTableRow {
    fn from(r: Recommendation) -> Self {
        RecommendationTableRow {
            track_name: r.track_name,
            artists: r.artists,
            album_name: r.album_name,
            release_date: r.release_date.unwrap_or_default(),
            popularity: cell(r.popularity),
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "Track Name")]
    pub track_name: String,
    #[tabled(rename = "Artists")]
    pub artists: String,
    #[tabled(rename = "Album Name")]
    pub album_name: String,
    #[tabled(rename = "Release Date")]
    pub release_date: String,
    #[tabled(rename = "Popularity")]
    pub popularity: String,
    #[tabled(rename = "Duration (ms)")]
    pub duration_ms: String,
    #[tabled(rename = "Danceability")]
    pub danceability: String,
    #[tabled(rename = "Energy")]
    pub energy: String,
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Loudness")]
    pub loudness: String,
    #[tabled(rename = "Mode")]
    pub mode: String,
    #[tabled(rename = "Speechiness")]
    pub speechiness: String,
    #[tabled(rename = "Acousticness")]
    pub acousticness: String,
    #[tabled(rename = "Instrumentalness")]
    pub instrumentalness: String,
    #[tabled(rename = "Liveness")]
    pub liveness: String,
    #[tabled(rename = "Valence")]
    pub valence: String,
    #[tabled(rename = "Tempo")]
    pub tempo: String,
}

impl From<&TrackRecord> for TrackTableRow {
    fn from(t: &TrackRecord) -> Self {
        TrackTableRow {
            track_name: t.track_name.clone(),
            artists: t.artists.clone(),
            album_name: t.album_name.clone(),
            release_date: t.release_date.clone().unwrap_or_default(),
            popularity: cell(t.popularity),
            duration_ms: cell(t.duration_ms),
            danceability: cell(t.danceability),
            energy: cell(t.energy),
            key: cell(t.key),
            loudness: cell(t.loudness),
            mode: cell(t.mode),
            speechiness: cell(t.speechiness),
            acousticness: cell(t.acousticness),
            instrumentalness: cell(t.instrumentalness),
            liveness: cell(t.liveness),
            valence: cell(t.valence),
            tempo: cell(t.tempo),
        }
    }
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
