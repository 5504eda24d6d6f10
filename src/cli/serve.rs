use tracing_subscriber::EnvFilter;

use crate::{
    api::{ApiOptions, AppState},
    config, error, info,
    management::CatalogGateway,
    server, warning,
};

/// Runs the HTTP facade until the process is stopped.
///
/// Installs a `tracing` subscriber honouring `RUST_LOG` (default
/// `trackscout=info,tower_http=info`), builds the gateway from the
/// environment and binds `SERVER_ADDRESS`.
///
/// Missing client credentials do not prevent startup. Every catalog request
/// then fails with an authentication error until they are configured.
pub async fn serve() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("trackscout=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if config::spotify_credentials().is_none() {
        warning!(
            "SPOTIFY_API_AUTH_CLIENT_ID or SPOTIFY_API_AUTH_CLIENT_SECRET is not set. Catalog requests will fail."
        );
    }

    let options = ApiOptions::from_env();
    let state = AppState::new(CatalogGateway::from_env(), options);

    info!(
        "Serving on http://{} (features: {}, uri: {})",
        config::server_addr(),
        options.features_enabled,
        options.include_uri
    );

    if let Err(e) = server::start_api_server(state).await {
        error!("Server failed. Err: {}", e);
    }
}
