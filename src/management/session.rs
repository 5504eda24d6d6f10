use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    error::{Error, Result},
    spotify::CatalogApi,
    types::{Credentials, Token},
};

/// Seconds before expiry at which a cached token is considered stale.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// Owns the authenticated session with the provider.
///
/// With `reuse` enabled the token is cached and refreshed lazily. The mutex
/// is held across the refresh, so concurrent callers wait for a single token
/// request instead of racing. With `reuse` disabled every operation
/// authenticates from scratch.
pub struct SessionManager {
    credentials: Option<Credentials>,
    reuse: bool,
    token: Mutex<Option<Token>>,
}

impl SessionManager {
    pub fn new(credentials: Option<Credentials>, reuse: bool) -> Self {
        SessionManager {
            credentials,
            reuse,
            token: Mutex::new(None),
        }
    }

    /// Returns a usable access token, authenticating if necessary.
    pub async fn ensure_authenticated(&self, api: &dyn CatalogApi) -> Result<String> {
        let Some(credentials) = self.credentials.as_ref() else {
            return Err(Error::Authentication(
                "missing client credentials".to_string(),
            ));
        };

        if !self.reuse {
            let token = api.request_token(credentials).await?;
            return Ok(token.access_token);
        }

        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if !is_expired(token) {
                return Ok(token.access_token.clone());
            }
        }

        tracing::info!("requesting new provider session");
        let token = api.request_token(credentials).await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }

    /// Drops the cached token so the next operation authenticates again.
    pub async fn invalidate(&self) {
        let mut cached = self.token.lock().await;
        *cached = None;
    }

    pub async fn current_token(&self) -> Option<Token> {
        self.token.lock().await.clone()
    }
}

fn is_expired(token: &Token) -> bool {
    let now = Utc::now().timestamp() as u64;
    now + EXPIRY_MARGIN_SECS >= token.obtained_at.saturating_add(token.expires_in)
}
