#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use trackscout::{
    error::{Error, Result},
    management::{CatalogGateway, SessionManager},
    spotify::CatalogApi,
    types::{Album, Artist, AudioFeatures, Credentials, ExternalIds, Image, Token, Track},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Token,
    Search {
        text: String,
        limit: u32,
        market: String,
    },
    Recommendations(Vec<(String, String)>),
    Features(String),
}

/// In-memory provider that records every call it receives.
pub struct MockCatalog {
    pub calls: Mutex<Vec<Call>>,
    pub tracks: Vec<Track>,
    pub features: Option<AudioFeatures>,
    pub reject_token: bool,
    pub upstream_failure: Option<Error>,
    pub token_lifetime: u64,
}

impl MockCatalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        MockCatalog {
            calls: Mutex::new(Vec::new()),
            tracks,
            features: None,
            reject_token: false,
            upstream_failure: None,
            token_lifetime: 3600,
        }
    }

    pub fn with_features(mut self, features: AudioFeatures) -> Self {
        self.features = Some(features);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn catalog_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| *c != Call::Token)
            .collect()
    }

    pub fn token_calls(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::Token).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn failure(&self) -> Result<()> {
        match &self.upstream_failure {
            Some(Error::Authentication(m)) => Err(Error::Authentication(m.clone())),
            Some(e) => Err(Error::Upstream(e.to_string())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogApi for MockCatalog {
    async fn request_token(&self, _credentials: &Credentials) -> Result<Token> {
        self.record(Call::Token);
        if self.reject_token {
            return Err(Error::Authentication("invalid_client".to_string()));
        }
        Ok(Token {
            access_token: format!("token-{}", self.token_calls()),
            token_type: "Bearer".to_string(),
            expires_in: self.token_lifetime,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }

    async fn search_tracks(
        &self,
        _token: &str,
        text: &str,
        limit: u32,
        market: &str,
    ) -> Result<Vec<Track>> {
        self.record(Call::Search {
            text: text.to_string(),
            limit,
            market: market.to_string(),
        });
        self.failure()?;
        Ok(self.tracks.iter().take(limit as usize).cloned().collect())
    }

    async fn recommendations(
        &self,
        _token: &str,
        params: &[(String, String)],
    ) -> Result<Vec<Track>> {
        self.record(Call::Recommendations(params.to_vec()));
        self.failure()?;
        let limit = params
            .iter()
            .find(|(k, _)| k == "limit")
            .and_then(|(_, v)| v.parse::<usize>().ok())
            .unwrap_or(usize::MAX);
        Ok(self.tracks.iter().take(limit).cloned().collect())
    }

    async fn audio_features(&self, _token: &str, id: &str) -> Result<Option<AudioFeatures>> {
        self.record(Call::Features(id.to_string()));
        self.failure()?;
        Ok(self.features.clone())
    }
}

pub fn credentials() -> Credentials {
    Credentials {
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
    }
}

pub fn gateway(mock: &Arc<MockCatalog>) -> CatalogGateway {
    CatalogGateway::new(
        mock.clone(),
        SessionManager::new(Some(credentials()), true),
        "US",
    )
}

pub fn track(id: &str, popularity: u32) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Song {}", id),
        artists: Some(vec![
            Artist {
                id: Some(format!("{}-artist", id)),
                name: Some(format!("Artist {}", id)),
            },
            Artist {
                id: Some("feat".to_string()),
                name: Some("Featured".to_string()),
            },
        ]),
        album: Some(Album {
            id: Some(format!("{}-album", id)),
            name: Some(format!("Album {}", id)),
            images: Some(vec![
                Image {
                    url: Some(format!("https://img.example/{}/640", id)),
                    height: Some(640),
                    width: Some(640),
                },
                Image {
                    url: Some(format!("https://img.example/{}/64", id)),
                    height: Some(64),
                    width: Some(64),
                },
            ]),
        }),
        external_ids: Some(ExternalIds {
            isrc: Some(format!("ISRC{}", id)),
        }),
        preview_url: Some(format!("https://preview.example/{}", id)),
        uri: Some(format!("spotify:track:{}", id)),
        popularity,
    }
}

pub fn features() -> AudioFeatures {
    AudioFeatures {
        id: Some("XYZ".to_string()),
        acousticness: Some(0.00242),
        danceability: Some(0.585),
        duration_ms: Some(237040),
        energy: Some(0.842),
        instrumentalness: Some(0.00686),
        key: Some(9),
        liveness: Some(0.0866),
        loudness: Some(-5.883),
        mode: Some(0),
        speechiness: Some(0.0556),
        tempo: Some(118.211),
        time_signature: Some(4),
        valence: Some(0.428),
    }
}
