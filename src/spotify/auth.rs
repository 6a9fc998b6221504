use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, StatusCode, header::AUTHORIZATION};

use crate::{Res, SporecError, config::Credentials, types::Token};

/// Exchanges application credentials for a bearer token.
///
/// Performs the OAuth 2.0 client-credentials grant against `token_url`:
/// the client id and secret are sent base64-encoded in an HTTP Basic
/// `Authorization` header and the form body carries
/// `grant_type=client_credentials`.
///
/// # Arguments
///
/// * `client` - HTTP client shared with the catalog lookups
/// * `token_url` - Token endpoint, usually `https://accounts.spotify.com/api/token`
/// * `credentials` - Client id and secret of the registered application
///
/// # Returns
///
/// - `Ok(Token)` - on HTTP 200, parsed from the JSON body
/// - `Err(SporecError::Authentication)` - on any other status, carrying the
///   status code and the response body for diagnostics
/// - `Err(SporecError::Http)` - on transport or decoding failures
///
/// The request is not retried.
///
/// # Example
///
/// ```
/// let client = reqwest::Client::new();
/// let credentials = Credentials::from_env()?;
/// let token = request_token(&client, &config::spotify_apitoken_url(), &credentials).await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Res<Token> {
    let response = client
        .post(token_url)
        .header(AUTHORIZATION, basic_authorization(credentials))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(SporecError::Authentication {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response.json::<Token>().await?)
}

/// Builds the `Basic <base64(client_id:client_secret)>` header value.
pub fn basic_authorization(credentials: &Credentials) -> String {
    let raw = format!(
        "{id}:{secret}",
        id = credentials.client_id,
        secret = credentials.client_secret
    );
    format!("Basic {}", STANDARD.encode(raw))
}
