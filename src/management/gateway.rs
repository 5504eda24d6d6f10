use std::sync::Arc;

use crate::{
    config,
    error::{Error, Result},
    options::{SEED_TRACKS_KEY, TuningOptions},
    spotify::{CatalogApi, SpotifyClient},
    types::{AudioFeatures, RecommendationRequest, SearchQuery, Track},
    utils,
};

use super::SessionManager;

/// The three catalog operations: authenticate, call upstream, sort.
pub struct CatalogGateway {
    api: Arc<dyn CatalogApi>,
    session: SessionManager,
    market: String,
}

impl CatalogGateway {
    pub fn new(api: Arc<dyn CatalogApi>, session: SessionManager, market: impl Into<String>) -> Self {
        CatalogGateway {
            api,
            session,
            market: market.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            Arc::new(SpotifyClient::from_env()),
            SessionManager::new(config::spotify_credentials(), config::session_reuse()),
            config::spotify_market(),
        )
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Normalizes raw request input and searches. Invalid input yields no tracks.
    pub async fn search(&self, raw_query: &str, raw_limit: Option<&str>) -> Result<Vec<Track>> {
        match utils::normalize_search(raw_query, raw_limit) {
            Ok(query) => self.find_tracks(&query).await,
            Err(e) => {
                tracing::debug!(error = %e, "search rejected before upstream call");
                Ok(Vec::new())
            }
        }
    }

    /// Searches within the configured market, most popular first.
    pub async fn find_tracks(&self, query: &SearchQuery) -> Result<Vec<Track>> {
        if query.text.chars().count() < utils::MIN_QUERY_LENGTH || query.limit == 0 {
            return Ok(Vec::new());
        }

        let token = self.session.ensure_authenticated(self.api.as_ref()).await?;
        let result = self
            .api
            .search_tracks(&token, &query.text, query.limit, &self.market)
            .await;
        let mut tracks = self.settle(result).await?;

        utils::sort_by_popularity(&mut tracks);
        tracing::debug!(query = %query.text, limit = query.limit, found = tracks.len(), "track search");
        Ok(tracks)
    }

    /// Recommendations seeded by exactly one track, most popular first.
    pub async fn find_recommendations(
        &self,
        seed_id: &str,
        options: &TuningOptions,
        limit: u32,
    ) -> Result<Vec<Track>> {
        let Ok(seed_track_id) = utils::normalize_id(seed_id) else {
            return Ok(Vec::new());
        };

        let request = RecommendationRequest {
            seed_track_id,
            limit: if limit == 0 {
                utils::DEFAULT_RECOMMENDATION_LIMIT
            } else {
                limit
            },
            options: options.clone(),
        };
        let params = recommendation_params(&request);

        let token = self.session.ensure_authenticated(self.api.as_ref()).await?;
        let result = self.api.recommendations(&token, &params).await;
        let mut tracks = self.settle(result).await?;

        utils::sort_by_popularity(&mut tracks);
        tracing::debug!(
            seed = %request.seed_track_id,
            options = request.options.len(),
            found = tracks.len(),
            "recommendations"
        );
        Ok(tracks)
    }

    pub async fn find_features(&self, id: &str) -> Result<Option<AudioFeatures>> {
        let Ok(id) = utils::normalize_id(id) else {
            return Ok(None);
        };

        let token = self.session.ensure_authenticated(self.api.as_ref()).await?;
        let result = self.api.audio_features(&token, &id).await;
        self.settle(result).await
    }

    async fn settle<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            tracing::warn!(error = %e, "provider call failed");
            if matches!(e, Error::Authentication(_)) {
                self.session.invalidate().await;
            }
        }
        result
    }
}

/// Query parameters for a recommendation call: the seed, the limit, then the options.
pub fn recommendation_params(request: &RecommendationRequest) -> Vec<(String, String)> {
    let mut params = vec![
        (SEED_TRACKS_KEY.to_string(), request.seed_track_id.clone()),
        ("limit".to_string(), request.limit.to_string()),
    ];
    params.extend(
        request
            .options
            .iter()
            .map(|(key, value)| (key.as_str().to_string(), value.clone())),
    );
    params
}
