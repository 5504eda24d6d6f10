use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    management::CatalogGateway,
    options::{self, OptionKey},
    shaper, success,
    types::{FeatureTableRow, TrackTableRow, TrackView},
    utils, warning,
};

/// Searches tracks and prints them as a table, most popular first.
pub async fn search(query: String, limit: Option<u32>) {
    let gateway = CatalogGateway::from_env();
    let limit = limit.map(|l| l.to_string());

    let pb = spinner("Searching tracks...");
    let result = gateway.search(&query, limit.as_deref()).await;
    pb.finish_and_clear();

    match result {
        Ok(tracks) if tracks.is_empty() => {
            warning!("No tracks found for '{}' (queries need at least 3 characters).", query)
        }
        Ok(tracks) => print_tracks(shaper::to_track_views(&tracks, false)),
        Err(e) => error!("Search failed. Err: {}", e),
    }
}

/// Prints recommendations seeded by `id`. Options outside the allow-list are reported and skipped.
pub async fn recommend(id: String, limit: Option<u32>, raw_options: Vec<(String, String)>) {
    for (key, _) in raw_options.iter() {
        if key.parse::<OptionKey>().is_err() {
            warning!("Ignoring unknown option '{}'.", key);
        }
    }

    let tuning = options::filter_options(raw_options.iter().map(|(k, v)| (k, v)));
    let limit = limit
        .filter(|l| *l > 0)
        .unwrap_or(utils::DEFAULT_RECOMMENDATION_LIMIT);
    let gateway = CatalogGateway::from_env();

    let pb = spinner("Fetching recommendations...");
    let result = gateway.find_recommendations(&id, &tuning, limit).await;
    pb.finish_and_clear();

    match result {
        Ok(tracks) if tracks.is_empty() => warning!("No recommendations for '{}'.", id),
        Ok(tracks) => {
            success!("{} recommendations for {}", tracks.len(), id);
            print_tracks(shaper::to_track_views(&tracks, false));
        }
        Err(e) => error!("Recommendations failed. Err: {}", e),
    }
}

pub async fn features(id: String) {
    let gateway = CatalogGateway::from_env();

    let pb = spinner("Fetching audio features...");
    let result = gateway.find_features(&id).await;
    pb.finish_and_clear();

    let features = match result {
        Ok(f) => f,
        Err(e) => error!("Audio features failed. Err: {}", e),
    };

    let Some(view) = shaper::to_feature_view(features.as_ref()).into_iter().next() else {
        warning!("No audio features for '{}'.", id);
        return;
    };

    let rows: Vec<FeatureTableRow> = serde_json::to_value(&view)
        .ok()
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default()
        .into_iter()
        .map(|(feature, value)| FeatureTableRow {
            feature,
            value: if value.is_null() {
                "-".to_string()
            } else {
                value.to_string()
            },
        })
        .collect();

    println!("{}", Table::new(rows));
}

fn print_tracks(views: Vec<TrackView>) {
    let rows: Vec<TrackTableRow> = views
        .into_iter()
        .map(|v| TrackTableRow {
            title: v.title,
            artist: v.artist.unwrap_or_else(|| "-".to_string()),
            album: v.album.unwrap_or_else(|| "-".to_string()),
            id: v.spotify_id,
        })
        .collect();

    println!("{}", Table::new(rows));
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
