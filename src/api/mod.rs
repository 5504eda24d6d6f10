//! # API Module
//!
//! This module provides the HTTP endpoints of trackscout. Each handler reads
//! raw query parameters, hands them to the [`CatalogGateway`] and maps the
//! provider records through [`crate::shaper`] into the JSON contract the
//! browser client relies on.
//!
//! ## Endpoints
//!
//! ### Catalog
//!
//! - [`track_search`] - `GET /api/v1/track_search?query=..&limit=..`. Answers with
//!   a list of track views sorted by popularity, or `400 "Must pass a query"` when
//!   `query` is absent. Queries shorter than three characters give `[]`.
//! - [`recommendations`] - `GET /api/v1/recommendations?id=..&limit=..` plus any of
//!   the tuning options in [`crate::options::OptionKey`]. Other parameters are ignored.
//! - [`features`] - `GET /api/v1/features?id=..`. Answers with a list holding zero
//!   or one feature view. Only mounted when features are enabled.
//!
//! ### Monitoring
//!
//! - [`health`] - Provides a health check endpoint that returns application status,
//!   version and enabled capabilities.
//!
//! ## Error Responses
//!
//! Authentication failures answer `500`, provider failures `502`, both with a
//! `{"error": ".."}` body. See [`crate::error::Error`].
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use trackscout::{api::{ApiOptions, AppState}, management::CatalogGateway, server};
//!
//! let state = AppState::new(CatalogGateway::from_env(), ApiOptions::from_env());
//! let app = server::build_router(state);
//! ```

mod health;
mod search;

use std::sync::Arc;

pub use health::health;
pub use search::{MISSING_ID, MISSING_QUERY, features, recommendations, track_search};

use crate::{config, management::CatalogGateway};

/// Optional capabilities of the HTTP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiOptions {
    /// Include the provider `uri` in every track view.
    pub include_uri: bool,
    /// Mount `GET /api/v1/features`.
    pub features_enabled: bool,
}

impl Default for ApiOptions {
    fn default() -> Self {
        ApiOptions {
            include_uri: true,
            features_enabled: true,
        }
    }
}

impl ApiOptions {
    pub fn from_env() -> Self {
        ApiOptions {
            include_uri: config::include_uri(),
            features_enabled: config::features_enabled(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<CatalogGateway>,
    pub options: ApiOptions,
}

impl AppState {
    pub fn new(gateway: CatalogGateway, options: ApiOptions) -> Self {
        AppState {
            gateway: Arc::new(gateway),
            options,
        }
    }
}
