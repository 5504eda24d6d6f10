use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{error::Result, options::filter_options, shaper, utils};

use super::AppState;

pub const MISSING_QUERY: &str = "Must pass a query";
pub const MISSING_ID: &str = "Must pass an id";

/// GET /api/v1/track_search?query=..&limit=..
pub async fn track_search(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response> {
    let Some(query) = params.get("query") else {
        return Ok(missing_param(MISSING_QUERY));
    };

    let tracks = state
        .gateway
        .search(query, params.get("limit").map(String::as_str))
        .await?;

    Ok(Json(shaper::to_track_views(&tracks, state.options.include_uri)).into_response())
}

/// GET /api/v1/recommendations?id=..&limit=..&target_energy=..
pub async fn recommendations(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response> {
    let Some(id) = params.get("id") else {
        return Ok(missing_param(MISSING_ID));
    };

    let limit = utils::parse_limit(
        params.get("limit").map(String::as_str),
        utils::DEFAULT_RECOMMENDATION_LIMIT,
    );
    let options = filter_options(&params);

    let tracks = state
        .gateway
        .find_recommendations(id, &options, limit)
        .await?;

    Ok(Json(shaper::to_track_views(&tracks, state.options.include_uri)).into_response())
}

/// GET /api/v1/features?id=..
pub async fn features(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response> {
    let Some(id) = params.get("id") else {
        return Ok(missing_param(MISSING_ID));
    };

    let features = state.gateway.find_features(id).await?;
    Ok(Json(shaper::to_feature_view(features.as_ref())).into_response())
}

fn missing_param(message: &'static str) -> Response {
    (StatusCode::BAD_REQUEST, Json(message)).into_response()
}
