//! Content-based and hybrid track recommendations.
//!
//! The content-based ranking orders every track of the dataset by the cosine
//! similarity of its scaled feature row to the seed's row. The hybrid ranking
//! takes the top of that list and re-orders it by raw popularity.

use chrono::{Local, NaiveDate};

use crate::{
    Res, SporecError,
    features::{FeatureMatrix, FeatureRow},
    types::{Recommendation, TrackRecord},
};

pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// Result of [`hybrid_recommendations`].
///
/// `seed_weighted_popularity` is the recency weight of the seed track. It is
/// reported alongside the ranking but does not influence the order of
/// `tracks`, which is by raw popularity.
#[derive(Debug, Clone, PartialEq)]
pub struct HybridRecommendations {
    pub seed_weighted_popularity: f64,
    pub tracks: Vec<Recommendation>,
}

/// Cosine of the angle between two feature rows.
///
/// Returns `0.0` when either row has zero length, which happens for a track
/// sitting at the minimum of every column after scaling.
pub fn cosine_similarity(a: &FeatureRow, b: &FeatureRow) -> f64 {
    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (x, y) in a.iter().zip(b.iter()) {
        dot_product += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a > 0.0 && norm_b > 0.0 {
        dot_product / (norm_a.sqrt() * norm_b.sqrt())
    } else {
        0.0
    }
}

fn seed_index(seed: &str, records: &[TrackRecord]) -> Res<usize> {
    records
        .iter()
        .position(|r| r.track_name == seed)
        .ok_or_else(|| SporecError::NotFound(seed.to_string()))
}

/// Returns up to `count` tracks most similar to the seed track.
///
/// The seed is the first record whose name equals `seed`. All rows are
/// scored against it and sorted by similarity, highest first; equal scores
/// keep dataset order. The seed's own row is never part of the result.
///
/// # Errors
///
/// [`SporecError::NotFound`] if no record is named `seed`.
pub fn content_based_recommendations(
    seed: &str,
    records: &[TrackRecord],
    matrix: &FeatureMatrix,
    count: usize,
) -> Res<Vec<Recommendation>> {
    let seed_index = seed_index(seed, records)?;
    let seed_row = matrix
        .row(seed_index)
        .ok_or_else(|| SporecError::NotFound(seed.to_string()))?;

    let mut scores: Vec<(usize, f64)> = matrix
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| (index, cosine_similarity(seed_row, row)))
        .collect();
    scores.sort_by(|a, b| b.1.total_cmp(&a.1));

    Ok(scores
        .into_iter()
        .filter(|(index, _)| *index != seed_index)
        .filter_map(|(index, _)| records.get(index))
        .take(count)
        .map(Recommendation::from)
        .collect())
}

/// Content-based candidates re-ordered by popularity.
///
/// Takes the `count` most similar tracks and sorts them by raw popularity,
/// highest first. Tracks without a popularity go last and ties keep their
/// similarity order. The seed's recency weight is computed and returned but
/// not used for ordering.
///
/// # Errors
///
/// [`SporecError::NotFound`] if no record is named `seed`.
pub fn hybrid_recommendations(
    seed: &str,
    records: &[TrackRecord],
    matrix: &FeatureMatrix,
    count: usize,
) -> Res<HybridRecommendations> {
    let mut tracks = content_based_recommendations(seed, records, matrix, count)?;
    let seed_record = &records[seed_index(seed, records)?];
    let seed_weighted_popularity =
        calculate_weighted_popularity(seed_record.release_date.as_deref());

    tracks.sort_by(|a, b| b.popularity.cmp(&a.popularity));

    Ok(HybridRecommendations {
        seed_weighted_popularity,
        tracks,
    })
}

/// Parses a full `YYYY-MM-DD` release date.
pub fn parse_release_date(release_date: &str) -> Res<NaiveDate> {
    NaiveDate::parse_from_str(release_date, "%Y-%m-%d")
        .map_err(|e| SporecError::Parse(format!("release date '{}': {}", release_date, e)))
}

/// Recency weight `1 / (days_since_release + 1)` as of `today`.
///
/// Absent, partial (`YYYY`, `YYYY-MM`) or malformed dates weigh `0.0`. A date
/// after `today` counts as released today.
pub fn weighted_popularity_at(release_date: Option<&str>, today: NaiveDate) -> f64 {
    let Some(release_date) = release_date else {
        return 0.0;
    };

    match parse_release_date(release_date) {
        Ok(date) => {
            let days_since_release = (today - date).num_days().max(0);
            1.0 / (days_since_release as f64 + 1.0)
        }
        Err(_) => 0.0,
    }
}

/// [`weighted_popularity_at`] evaluated against the local wall clock.
pub fn calculate_weighted_popularity(release_date: Option<&str>) -> f64 {
    weighted_popularity_at(release_date, Local::now().date_naive())
}
