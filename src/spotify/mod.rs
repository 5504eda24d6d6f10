//! # Spotify Integration Module
//!
//! This module is the boundary between trackscout and the Spotify Web API. It
//! knows how to obtain an application token and how to call the three catalog
//! endpoints the facade exposes. It does not sort, filter or reshape anything;
//! that happens in [`crate::management`] and [`crate::shaper`].
//!
//! ## Architecture
//!
//! ```text
//! API / CLI Layer
//!          ↓
//! Catalog Gateway (crate::management)
//!          ↓
//! CatalogApi trait  ←── test doubles plug in here
//!          ↓
//! SpotifyClient (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The facade acts on its own behalf, not on behalf of a user, so it uses the
//! OAuth 2.0 client credentials grant: the client id and secret are sent with
//! a Basic authorization header and exchanged for a short-lived bearer token.
//! No refresh token is issued; a new token is simply requested when needed.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client credentials token exchange
//! - `GET /search` - track search restricted to a market
//! - `GET /recommendations` - seed-based recommendations with tuning options
//! - `GET /audio-features/{id}` - audio features of a single track
//!
//! ## Error Types
//!
//! Every call returns [`crate::error::Result`]:
//! - **`Authentication`** - the token endpoint rejected the credentials
//! - **`Upstream`** - network failures, unexpected status codes and undecodable bodies
//!
//! Nothing is retried here.

pub mod auth;
pub mod tracks;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config,
    error::Result,
    types::{AudioFeatures, Credentials, Token, Track},
};

/// Upstream catalog operations the gateway relies on.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn request_token(&self, credentials: &Credentials) -> Result<Token>;

    async fn search_tracks(
        &self,
        token: &str,
        text: &str,
        limit: u32,
        market: &str,
    ) -> Result<Vec<Track>>;

    /// `params` is the complete query string, seed and limit included.
    async fn recommendations(&self, token: &str, params: &[(String, String)])
    -> Result<Vec<Track>>;

    async fn audio_features(&self, token: &str, id: &str) -> Result<Option<AudioFeatures>>;
}

/// [`CatalogApi`] over HTTPS.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    client: Client,
    api_url: String,
    token_url: String,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>, token_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token_url: token_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::spotify_apiurl(), config::spotify_apitoken_url())
    }
}

#[async_trait]
impl CatalogApi for SpotifyClient {
    async fn request_token(&self, credentials: &Credentials) -> Result<Token> {
        auth::request_token(&self.client, &self.token_url, credentials).await
    }

    async fn search_tracks(
        &self,
        token: &str,
        text: &str,
        limit: u32,
        market: &str,
    ) -> Result<Vec<Track>> {
        tracks::search_tracks(&self.client, &self.api_url, token, text, limit, market).await
    }

    async fn recommendations(
        &self,
        token: &str,
        params: &[(String, String)],
    ) -> Result<Vec<Track>> {
        tracks::get_recommendations(&self.client, &self.api_url, token, params).await
    }

    async fn audio_features(&self, token: &str, id: &str) -> Result<Option<AudioFeatures>> {
        tracks::get_audio_features(&self.client, &self.api_url, token, id).await
    }
}
