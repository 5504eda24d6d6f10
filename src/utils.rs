use std::borrow::Cow;

use crate::{
    error::{Error, Result},
    types::{SearchQuery, Track},
};

pub const MIN_QUERY_LENGTH: usize = 3;
pub const DEFAULT_SEARCH_LIMIT: u32 = 5;
pub const DEFAULT_RECOMMENDATION_LIMIT: u32 = 10;

/// Percent-decodes and trims the search text, then checks its length.
///
/// The text may arrive encoded once more than the HTTP layer decodes, so it
/// is decoded here as well. Input that is not valid percent-encoded UTF-8 is
/// kept as received.
pub fn normalize_search(raw_query: &str, raw_limit: Option<&str>) -> Result<SearchQuery> {
    let decoded = urlencoding::decode(raw_query).unwrap_or(Cow::Borrowed(raw_query));
    let text = decoded.trim();

    if text.chars().count() < MIN_QUERY_LENGTH {
        return Err(Error::InvalidQuery(format!(
            "search text must have at least {} characters",
            MIN_QUERY_LENGTH
        )));
    }

    Ok(SearchQuery {
        text: text.to_string(),
        limit: parse_limit(raw_limit, DEFAULT_SEARCH_LIMIT),
    })
}

/// Accepts any non-blank identifier. The provider decides whether it exists.
pub fn normalize_id(raw_id: &str) -> Result<String> {
    let id = raw_id.trim();
    if id.is_empty() {
        return Err(Error::InvalidQuery("identifier must not be empty".to_string()));
    }
    Ok(id.to_string())
}

/// Positive integers are taken as is, anything else yields `default`.
pub fn parse_limit(raw_limit: Option<&str>, default: u32) -> u32 {
    raw_limit
        .and_then(|l| l.trim().parse::<u32>().ok())
        .filter(|l| *l > 0)
        .unwrap_or(default)
}

/// Most popular first. Equal popularity keeps upstream order (stable sort).
pub fn sort_by_popularity(tracks: &mut [Track]) {
    tracks.sort_by(|a, b| b.popularity.cmp(&a.popularity));
}
