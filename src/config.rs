//! Configuration management for trackscout.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, server settings and the
//! optional capabilities of the HTTP surface.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{Res, types::Credentials};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_MARKET: &str = "US";

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` file in the platform-specific local data directory under
/// `trackscout/.env` first, then in the current working directory. Variables
/// already present in the process environment are never overwritten, and a
/// missing file is not an error.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/trackscout/.env`
/// - macOS: `~/Library/Application Support/trackscout/.env`
/// - Windows: `%LOCALAPPDATA%/trackscout/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Res<()> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("trackscout/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)?;
    }
    dotenv::dotenv().ok();
    Ok(())
}

/// Returns the address the HTTP server binds to.
///
/// Reads `SERVER_ADDRESS`, falling back to `127.0.0.1:3000`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify client credentials, if both halves are configured.
///
/// Reads `SPOTIFY_API_AUTH_CLIENT_ID` and `SPOTIFY_API_AUTH_CLIENT_SECRET`.
/// Blank values count as missing. The absence is not reported here; the
/// session reports it as an authentication failure on first use.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_credentials() -> Option<Credentials> {
    let client_id = non_blank_var("SPOTIFY_API_AUTH_CLIENT_ID")?;
    let client_secret = non_blank_var("SPOTIFY_API_AUTH_CLIENT_SECRET")?;
    Some(Credentials {
        client_id,
        client_secret,
    })
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the Spotify token endpoint used for the client credentials grant.
///
/// Reads `SPOTIFY_API_TOKEN_URL`, falling back to
/// `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| DEFAULT_SPOTIFY_API_TOKEN_URL.to_string())
}

/// Returns the market every search is restricted to.
pub fn spotify_market() -> String {
    non_blank_var("SPOTIFY_MARKET").unwrap_or_else(|| DEFAULT_SPOTIFY_MARKET.to_string())
}

/// Whether track views carry the provider `uri` field. `API_INCLUDE_URI`, default on.
pub fn include_uri() -> bool {
    flag("API_INCLUDE_URI", true)
}

/// Whether the audio features endpoint is mounted. `API_FEATURES_ENABLED`, default on.
pub fn features_enabled() -> bool {
    flag("API_FEATURES_ENABLED", true)
}

/// Whether the session token is cached between operations. `SESSION_REUSE`, default on.
pub fn session_reuse() -> bool {
    flag("SESSION_REUSE", true)
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn flag(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|v| parse_flag(&v))
        .unwrap_or(default)
}

/// Parses the boolean spellings accepted in configuration.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
