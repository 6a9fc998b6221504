use std::fmt;

use clap::ValueEnum;
use tabled::Table;

use super::dataset::load_dataset;
use crate::{
    Res, SporecError, config,
    features::FeatureMatrix,
    info,
    recommend::{content_based_recommendations, hybrid_recommendations},
    types::{Recommendation, RecommendationTableRow},
    warning,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RecommendMode {
    /// Most similar tracks, re-ordered by popularity
    #[default]
    Hybrid,
    /// Most similar tracks by audio features only
    Content,
}

impl fmt::Display for RecommendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendMode::Hybrid => write!(f, "Hybrid"),
            RecommendMode::Content => write!(f, "Content-based"),
        }
    }
}

pub async fn recommend(
    playlist_id: Option<String>,
    song: Option<String>,
    count: usize,
    mode: RecommendMode,
) {
    let seed = song.unwrap_or_else(config::default_seed_track);

    if let Err(e) = call_recommend(playlist_id, &seed, count, mode).await {
        println!("{}", super::fatal_message(&e));
    }
}

async fn call_recommend(
    playlist_id: Option<String>,
    seed: &str,
    count: usize,
    mode: RecommendMode,
) -> Res<()> {
    let records = load_dataset(playlist_id).await?;
    let matrix = FeatureMatrix::from_records(&records);

    let result = match mode {
        RecommendMode::Content => content_based_recommendations(seed, &records, &matrix, count),
        RecommendMode::Hybrid => {
            hybrid_recommendations(seed, &records, &matrix, count).map(|hybrid| {
                info!(
                    "Weighted popularity of '{}': {:.6}",
                    seed, hybrid.seed_weighted_popularity
                );
                hybrid.tracks
            })
        }
    };

    if let Some(report) = recommendation_report(mode, seed, result)? {
        println!("{}", report);
    }
    Ok(())
}

/// Turns a ranking result into the text printed for it.
///
/// A seed that is not part of the playlist is only warned about and yields
/// no report. Every other error is handed back to the caller.
pub fn recommendation_report(
    mode: RecommendMode,
    seed: &str,
    result: Res<Vec<Recommendation>>,
) -> Res<Option<String>> {
    match result {
        Ok(tracks) => Ok(Some(format!(
            "{mode} recommended songs for '{seed}':\n{table}",
            mode = mode,
            seed = seed,
            table = render(tracks)
        ))),
        Err(e @ SporecError::NotFound(_)) => {
            warning!("{}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn render(tracks: Vec<Recommendation>) -> Table {
    let rows: Vec<RecommendationTableRow> = tracks
        .into_iter()
        .map(RecommendationTableRow::from)
        .collect();
    Table::new(rows)
}
