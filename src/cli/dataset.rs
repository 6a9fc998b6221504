use reqwest::Client;
use tabled::Table;

use crate::{
    Res, SporecError,
    config::{self, Credentials},
    dataset::build_dataset,
    info,
    spotify::{self, Catalog},
    success,
    types::{TrackRecord, TrackTableRow},
};

pub async fn dataset(playlist_id: Option<String>) {
    match load_dataset(playlist_id).await {
        Ok(records) => {
            let rows: Vec<TrackTableRow> = records.iter().map(TrackTableRow::from).collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => println!("{}", super::fatal_message(&e)),
    }
}

/// Authenticates and builds the dataset of the requested playlist.
///
/// Falls back to `SPOREC_PLAYLIST_ID` when no playlist is passed.
pub(super) async fn load_dataset(playlist_id: Option<String>) -> Res<Vec<TrackRecord>> {
    let playlist_id = playlist_id
        .or_else(config::default_playlist_id)
        .ok_or_else(|| {
            SporecError::Config("no playlist given; pass --playlist or set SPOREC_PLAYLIST_ID".into())
        })?;

    let credentials = Credentials::from_env()?;
    let client = Client::new();
    let token =
        spotify::auth::request_token(&client, &config::spotify_apitoken_url(), &credentials)
            .await?;
    success!("Authenticated with Spotify.");

    let catalog = Catalog::new(client, config::spotify_apiurl(), token.access_token);
    info!("Gather track information for playlist {}", playlist_id);
    let records = build_dataset(&catalog, &playlist_id).await?;
    success!("Track information gathered for {} tracks.", records.len());

    Ok(records)
}
