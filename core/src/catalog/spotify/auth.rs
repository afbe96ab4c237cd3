use super::dto::TokenResponse;
use crate::catalog::CatalogError;
use parking_lot::Mutex;
use reqwest::blocking::Client;
use std::time::{Duration, Instant};
use tracing::debug;

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub enum Credentials {
    /// A token issued elsewhere, used as-is until the API rejects it.
    AccessToken(String),
    ClientCredentials { client_id: String, client_secret: String },
}

impl Credentials {
    /// Reads `SPOTIFY_ACCESS_TOKEN`, falling back to `SPOTIFY_CLIENT_ID` and
    /// `SPOTIFY_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self, CatalogError> {
        if let Some(token) = non_empty_var("SPOTIFY_ACCESS_TOKEN") {
            return Ok(Self::AccessToken(token));
        }
        match (non_empty_var("SPOTIFY_CLIENT_ID"), non_empty_var("SPOTIFY_CLIENT_SECRET")) {
            (Some(client_id), Some(client_secret)) => Ok(Self::ClientCredentials {
                client_id,
                client_secret,
            }),
            _ => Err(CatalogError::Auth(
                "set SPOTIFY_ACCESS_TOKEN or SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET".to_string(),
            )),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

struct CachedToken {
    token: String,
    refresh_at: Instant,
}

/// Hands out bearer tokens, requesting a new one through the
/// client-credentials grant one minute before the cached one expires.
pub struct TokenProvider {
    credentials: Credentials,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenProvider {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            cached: Mutex::new(None),
        }
    }

    pub fn bearer(&self, http: &Client) -> Result<String, CatalogError> {
        let (client_id, client_secret) = match &self.credentials {
            Credentials::AccessToken(token) => return Ok(token.clone()),
            Credentials::ClientCredentials {
                client_id,
                client_secret,
            } => (client_id, client_secret),
        };

        let mut cached = self.cached.lock();
        if let Some(token) = cached.as_ref().filter(|token| Instant::now() < token.refresh_at) {
            return Ok(token.token.clone());
        }

        debug!("requesting spotify access token");
        let response = http
            .post(TOKEN_URL)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Auth(format!("token request failed with HTTP {}", status.as_u16())));
        }
        let token: TokenResponse = response
            .json()
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(EXPIRY_MARGIN);
        *cached = Some(CachedToken {
            token: token.access_token.clone(),
            refresh_at: Instant::now() + lifetime,
        });
        Ok(token.access_token)
    }

    /// Drops the cached token so the next request fetches a fresh one.
    pub fn invalidate(&self) {
        *self.cached.lock() = None;
    }
}
