use crate::{
    spotify::Catalog,
    types::{AudioFeatures, AudioFeaturesResponse, TrackDetail},
};

impl Catalog {
    /// Retrieves the audio-feature vector of one track.
    ///
    /// Uses the several-tracks endpoint with a single id, which answers with
    /// `{"audio_features": [null]}` when the catalog has no analysis for the
    /// track. That case yields `Ok(None)`.
    pub async fn audio_features(
        &self,
        track_id: &str,
    ) -> Result<Option<AudioFeatures>, reqwest::Error> {
        let response: AudioFeaturesResponse = self
            .get_json("/audio-features", &[("ids", track_id)])
            .await?;

        Ok(response.audio_features.into_iter().next().flatten())
    }

    /// Retrieves track details; only `popularity` is used downstream.
    pub async fn track(&self, track_id: &str) -> Result<TrackDetail, reqwest::Error> {
        self.get_json(&format!("/tracks/{id}", id = track_id), &[])
            .await
    }
}
