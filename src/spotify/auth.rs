use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;

use crate::{
    error::{Error, Result},
    types::{Credentials, Token, TokenResponse},
};

/// Exchanges client credentials for an application access token.
///
/// Sends a `client_credentials` grant to the token endpoint with the client id
/// and secret in a Basic authorization header.
///
/// # Returns
///
/// - `Ok(Token)` - bearer token with its lifetime and the time it was obtained
/// - `Err(Error::Authentication)` - the endpoint answered with a non-success status
/// - `Err(Error::Upstream)` - network failure or an undecodable response
///
/// # Example
///
/// ```
/// let token = request_token(&client, "https://accounts.spotify.com/api/token", &credentials).await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<Token> {
    let basic = STANDARD.encode(format!(
        "{}:{}",
        credentials.client_id, credentials.client_secret
    ));

    let res = client
        .post(token_url)
        .header("Authorization", format!("Basic {}", basic))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        return Err(Error::Authentication(format!(
            "token request rejected: {} {}",
            status, body
        )));
    }

    let json: TokenResponse = res.json().await?;

    Ok(Token {
        access_token: json.access_token,
        token_type: json.token_type.unwrap_or_else(|| "Bearer".to_string()),
        expires_in: json.expires_in.unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
