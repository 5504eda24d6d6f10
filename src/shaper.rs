//! Projection of provider records into the outward JSON contract.
//!
//! Both projections are total: a record with missing album, images, artists
//! or external ids still produces a view, with the missing parts set to null.

use crate::types::{AudioFeatures, FeatureView, Track, TrackView};

pub fn to_track_view(track: &Track, include_uri: bool) -> TrackView {
    let album = track.album.as_ref();

    TrackView {
        title: track.name.clone(),
        spotify_id: track.id.clone(),
        isrc: track
            .external_ids
            .as_ref()
            .and_then(|ids| ids.isrc.clone()),
        artist: track
            .artists
            .as_ref()
            .and_then(|artists| artists.first())
            .and_then(|artist| artist.name.clone()),
        album: album.and_then(|a| a.name.clone()),
        image_url: album
            .and_then(|a| a.images.as_ref())
            .and_then(|images| images.first())
            .and_then(|image| image.url.clone()),
        preview_url: track.preview_url.clone(),
        uri: if include_uri { track.uri.clone() } else { None },
    }
}

pub fn to_track_views(tracks: &[Track], include_uri: bool) -> Vec<TrackView> {
    tracks
        .iter()
        .map(|t| to_track_view(t, include_uri))
        .collect()
}

/// Empty when the provider had no features, otherwise exactly one element.
pub fn to_feature_view(features: Option<&AudioFeatures>) -> Vec<FeatureView> {
    let Some(f) = features else {
        return Vec::new();
    };

    vec![FeatureView {
        acousticness: f.acousticness,
        danceability: f.danceability,
        duration_ms: f.duration_ms,
        energy: f.energy,
        instrumentalness: f.instrumentalness,
        key: f.key,
        liveness: f.liveness,
        loudness: f.loudness,
        mode: f.mode,
        speechiness: f.speechiness,
        tempo: f.tempo,
        time_signature: f.time_signature,
        valence: f.valence,
    }]
}
