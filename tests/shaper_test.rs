mod common;

use serde_json::json;
use trackscout::shaper::*;
use trackscout::types::{Album, Artist, AudioFeatures, ExternalIds, Image, Track};

#[test]
fn test_track_view_maps_every_field() {
    let view = to_track_view(&common::track("XYZ", 42), true);

    assert_eq!(view.title, "Song XYZ");
    assert_eq!(view.spotify_id, "XYZ");
    assert_eq!(view.isrc.as_deref(), Some("ISRCXYZ"));
    assert_eq!(view.artist.as_deref(), Some("Artist XYZ"));
    assert_eq!(view.album.as_deref(), Some("Album XYZ"));
    assert_eq!(view.image_url.as_deref(), Some("https://img.example/XYZ/640"));
    assert_eq!(view.preview_url.as_deref(), Some("https://preview.example/XYZ"));
    assert_eq!(view.uri.as_deref(), Some("spotify:track:XYZ"));
}

#[test]
fn test_track_view_json_contract() {
    let view = to_track_view(&common::track("XYZ", 42), true);
    let value = serde_json::to_value(&view).unwrap();

    assert_eq!(
        value,
        json!({
            "title": "Song XYZ",
            "spotifyId": "XYZ",
            "isrc": "ISRCXYZ",
            "artist": "Artist XYZ",
            "album": "Album XYZ",
            "imageUrl": "https://img.example/XYZ/640",
            "previewUrl": "https://preview.example/XYZ",
            "uri": "spotify:track:XYZ"
        })
    );
}

#[test]
fn test_track_view_omits_uri_when_disabled() {
    let view = to_track_view(&common::track("XYZ", 42), false);
    assert_eq!(view.uri, None);

    let value = serde_json::to_value(&view).unwrap();
    assert!(value.get("uri").is_none());
    assert!(value.get("previewUrl").is_some());
}

#[test]
fn test_track_view_tolerates_missing_everything() {
    let bare = Track {
        id: "bare".to_string(),
        name: "Bare".to_string(),
        ..Default::default()
    };
    let view = to_track_view(&bare, true);

    assert_eq!(view.title, "Bare");
    assert_eq!(view.spotify_id, "bare");
    assert_eq!(view.isrc, None);
    assert_eq!(view.artist, None);
    assert_eq!(view.album, None);
    assert_eq!(view.image_url, None);
    assert_eq!(view.preview_url, None);
    assert_eq!(view.uri, None);

    let value = serde_json::to_value(&view).unwrap();
    assert!(value["isrc"].is_null());
    assert!(value["artist"].is_null());
    assert!(value["imageUrl"].is_null());
}

#[test]
fn test_track_view_tolerates_empty_collections() {
    let track = Track {
        id: "empty".to_string(),
        name: "Empty".to_string(),
        artists: Some(Vec::new()),
        album: Some(Album {
            id: None,
            name: Some("Only Name".to_string()),
            images: Some(Vec::new()),
        }),
        external_ids: Some(ExternalIds::default()),
        ..Default::default()
    };
    let view = to_track_view(&track, true);

    assert_eq!(view.artist, None);
    assert_eq!(view.album.as_deref(), Some("Only Name"));
    assert_eq!(view.image_url, None);
    assert_eq!(view.isrc, None);
}

#[test]
fn test_track_view_tolerates_nameless_parts() {
    let track = Track {
        id: "x".to_string(),
        artists: Some(vec![Artist::default(), Artist {
            id: None,
            name: Some("Second".to_string()),
        }]),
        album: Some(Album {
            images: Some(vec![Image::default()]),
            ..Default::default()
        }),
        ..Default::default()
    };
    let view = to_track_view(&track, false);

    // only the primary artist counts
    assert_eq!(view.artist, None);
    assert_eq!(view.image_url, None);
    assert_eq!(view.album, None);
}

#[test]
fn test_track_view_from_sparse_provider_json() {
    let raw = json!({
        "id": "sparse",
        "name": "Sparse",
        "album": null,
        "artists": [],
        "popularity": 7
    });
    let track: Track = serde_json::from_value(raw).unwrap();
    let view = to_track_view(&track, true);

    assert_eq!(track.popularity, 7);
    assert_eq!(view.spotify_id, "sparse");
    assert_eq!(view.album, None);
    assert_eq!(view.artist, None);
}

#[test]
fn test_track_views_keep_order() {
    let tracks = vec![common::track("b", 90), common::track("a", 10)];
    let views = to_track_views(&tracks, true);

    let ids: Vec<&str> = views.iter().map(|v| v.spotify_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn test_feature_view_absent_is_empty() {
    assert!(to_feature_view(None).is_empty());
}

#[test]
fn test_feature_view_copies_thirteen_fields_verbatim() {
    let features = common::features();
    let views = to_feature_view(Some(&features));
    assert_eq!(views.len(), 1);

    let value = serde_json::to_value(&views[0]).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 13);

    assert_eq!(value["acousticness"], json!(0.00242));
    assert_eq!(value["danceability"], json!(0.585));
    assert_eq!(value["duration_ms"], json!(237040));
    assert_eq!(value["energy"], json!(0.842));
    assert_eq!(value["instrumentalness"], json!(0.00686));
    assert_eq!(value["key"], json!(9));
    assert_eq!(value["liveness"], json!(0.0866));
    assert_eq!(value["loudness"], json!(-5.883));
    assert_eq!(value["mode"], json!(0));
    assert_eq!(value["speechiness"], json!(0.0556));
    assert_eq!(value["tempo"], json!(118.211));
    assert_eq!(value["time_signature"], json!(4));
    assert_eq!(value["valence"], json!(0.428));
    assert!(object.get("id").is_none());
}

#[test]
fn test_feature_view_keeps_missing_fields_null() {
    let features = AudioFeatures {
        tempo: Some(99.5),
        ..Default::default()
    };
    let views = to_feature_view(Some(&features));
    let value = serde_json::to_value(&views[0]).unwrap();

    assert_eq!(value.as_object().unwrap().len(), 13);
    assert_eq!(value["tempo"], json!(99.5));
    assert!(value["energy"].is_null());
}
