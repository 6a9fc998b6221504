//! Feature matrix extraction and min-max scaling.

use crate::types::TrackRecord;

pub const FEATURE_COUNT: usize = 11;

/// Columns of the feature matrix, in order.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "Danceability",
    "Energy",
    "Key",
    "Loudness",
    "Mode",
    "Speechiness",
    "Acousticness",
    "Instrumentalness",
    "Liveness",
    "Valence",
    "Tempo",
];

pub type FeatureRow = [f64; FEATURE_COUNT];

impl TrackRecord {
    /// Raw feature values in [`FEATURE_COLUMNS`] order, absent values as `0.0`.
    pub fn feature_row(&self) -> FeatureRow {
        [
            self.danceability,
            self.energy,
            self.key,
            self.loudness,
            self.mode,
            self.speechiness,
            self.acousticness,
            self.instrumentalness,
            self.liveness,
            self.valence,
            self.tempo,
        ]
        .map(|v| v.unwrap_or(0.0))
    }
}

/// Scaled audio features, one row per record and in the same order.
///
/// Each column is rescaled independently so that its minimum becomes `0.0`
/// and its maximum `1.0`. A constant column scales to all zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    rows: Vec<FeatureRow>,
}

impl FeatureMatrix {
    pub fn from_records(records: &[TrackRecord]) -> Self {
        let mut rows: Vec<FeatureRow> = records.iter().map(TrackRecord::feature_row).collect();

        for column in 0..FEATURE_COUNT {
            let (min, max) = rows.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |acc, row| {
                (acc.0.min(row[column]), acc.1.max(row[column]))
            });
            let range = max - min;

            for row in rows.iter_mut() {
                row[column] = if range > 0.0 {
                    (row[column] - min) / range
                } else {
                    0.0
                };
            }
        }

        FeatureMatrix { rows }
    }

    pub fn row(&self, index: usize) -> Option<&FeatureRow> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
