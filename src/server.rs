use std::{net::SocketAddr, str::FromStr};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    api::{self, AppState},
    config,
    error::{Error, Result},
};

pub fn build_router(state: AppState) -> Router {
    let mut v1: Router<AppState> = Router::new()
        .route("/track_search", get(api::track_search))
        .route("/recommendations", get(api::recommendations));

    if state.options.features_enabled {
        v1 = v1.route("/features", get(api::features));
    }

    Router::new()
        .route("/health", get(api::health))
        .nest("/api/v1", v1)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_api_server(state: AppState) -> Result<()> {
    let addr = SocketAddr::from_str(&config::server_addr())
        .map_err(|e| Error::Config(format!("cannot parse server address: {}", e)))?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Config(format!("cannot bind {}: {}", addr, e)))?;

    tracing::info!(%addr, "listening");
    axum::serve(listener, build_router(state))
        .await
        .map_err(|e| Error::Config(format!("server stopped: {}", e)))
}
