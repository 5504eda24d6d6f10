use reqwest::{Client, Response, StatusCode};

use crate::{
    error::{Error, Result},
    types::{AudioFeatures, RecommendationsResponse, SearchResponse, Track},
};

/// Searches the catalog for tracks matching `text` within one market.
///
/// # Arguments
///
/// * `api_url` - Web API base URL without trailing slash
/// * `token` - valid bearer token
/// * `limit` - maximum number of tracks to return
/// * `market` - ISO 3166-1 alpha-2 country code, e.g. `US`
///
/// The tracks are returned in upstream order.
pub async fn search_tracks(
    client: &Client,
    api_url: &str,
    token: &str,
    text: &str,
    limit: u32,
    market: &str,
) -> Result<Vec<Track>> {
    let limit = limit.to_string();
    let res = client
        .get(format!("{}/search", api_url))
        .bearer_auth(token)
        .query(&[
            ("q", text),
            ("type", "track"),
            ("limit", limit.as_str()),
            ("market", market),
        ])
        .send()
        .await?;

    let res = check_status(res).await?;
    let body = res.json::<SearchResponse>().await?;
    Ok(body.tracks.map(|page| page.items).unwrap_or_default())
}

/// Generates recommendations. `params` already holds seed, limit and tuning options.
pub async fn get_recommendations(
    client: &Client,
    api_url: &str,
    token: &str,
    params: &[(String, String)],
) -> Result<Vec<Track>> {
    let res = client
        .get(format!("{}/recommendations", api_url))
        .bearer_auth(token)
        .query(params)
        .send()
        .await?;

    let res = check_status(res).await?;
    let body = res.json::<RecommendationsResponse>().await?;
    Ok(body.tracks)
}

/// Looks up the audio features of one track.
///
/// A 404, an empty body or a JSON `null` all mean the provider has no
/// features for the track and yield `Ok(None)`.
pub async fn get_audio_features(
    client: &Client,
    api_url: &str,
    token: &str,
    id: &str,
) -> Result<Option<AudioFeatures>> {
    let res = client
        .get(format!("{}/audio-features/{}", api_url, urlencoding::encode(id)))
        .bearer_auth(token)
        .send()
        .await?;

    if res.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }

    let res = check_status(res).await?;
    let body = res.text().await?;
    if body.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str::<Option<AudioFeatures>>(&body)
        .map_err(|e| Error::Upstream(format!("cannot decode audio features: {}", e)))
}

async fn check_status(res: Response) -> Result<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.unwrap_or_default();
    if status == StatusCode::UNAUTHORIZED {
        return Err(Error::Authentication(format!(
            "provider rejected the access token: {}",
            body
        )));
    }
    Err(Error::Upstream(format!("provider answered {}: {}", status, body)))
}
