use axum::{extract::State, response::Json};
use serde_json::{Value, json};

use super::AppState;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "capabilities": {
            "features": state.options.features_enabled,
            "uri": state.options.include_uri,
        }
    }))
}
