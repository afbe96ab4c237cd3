use super::auth::TokenProvider;
use crate::catalog::CatalogError;
use rand::Rng;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_RETRIES: u32 = 5;
const BACKOFF_BASE: Duration = Duration::from_millis(500);
const MAX_JITTER_MS: u64 = 300;

/// Blocking HTTP access to the Web API with retry and backoff.
///
/// 429 responses wait for `Retry-After`; 5xx responses and transport errors
/// back off exponentially with jitter. A 401 is retried once with a fresh
/// token. Other statuses fail immediately, and the last attempt never sleeps.
pub struct HttpClient {
    http: Client,
    auth: TokenProvider,
    max_retries: u32,
}

impl HttpClient {
    pub fn new(auth: TokenProvider) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        Ok(Self::with_http(http, auth))
    }

    fn with_http(http: Client, auth: TokenProvider) -> Self {
        Self {
            http,
            auth,
            max_retries: MAX_RETRIES,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T, CatalogError> {
        let response = self.get(url, query)?;
        response.json::<T>().map_err(|e| CatalogError::Parse(e.to_string()))
    }

    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Response, CatalogError> {
        let mut last_error = CatalogError::Network("no attempt made".to_string());
        let mut token_refreshed = false;

        for attempt in 0..=self.max_retries {
            let last_attempt = attempt == self.max_retries;
            let token = self.auth.bearer(&self.http)?;
            let sent = self
                .http
                .get(url)
                .bearer_auth(token)
                .header("Accept", "application/json")
                .query(query)
                .send();

            let response = match sent {
                Ok(response) => response,
                Err(error) => {
                    warn!(url, attempt, %error, "request failed");
                    last_error = CatalogError::Network(error.to_string());
                    if !last_attempt {
                        std::thread::sleep(backoff_duration(attempt));
                    }
                    continue;
                }
            };

            let status = response.status();
            if status.is_success() {
                return Ok(response);
            }
            match status {
                StatusCode::TOO_MANY_REQUESTS => {
                    let delay = retry_after_delay(response.headers());
                    debug!(url, ?delay, "rate limited");
                    last_error = CatalogError::RateLimited;
                    if !last_attempt {
                        std::thread::sleep(delay);
                    }
                }
                StatusCode::UNAUTHORIZED => {
                    self.auth.invalidate();
                    let rejected = CatalogError::Auth(format!("{} rejected the access token", url));
                    if token_refreshed || last_attempt {
                        return Err(rejected);
                    }
                    debug!(url, "access token rejected, retrying with a fresh one");
                    token_refreshed = true;
                    last_error = rejected;
                }
                StatusCode::NOT_FOUND => return Err(CatalogError::NotFound(url.to_string())),
                status if status.is_server_error() => {
                    warn!(url, attempt, status = status.as_u16(), "server error");
                    last_error = CatalogError::Server {
                        status: status.as_u16(),
                    };
                    if !last_attempt {
                        std::thread::sleep(backoff_duration(attempt));
                    }
                }
                status => {
                    return Err(CatalogError::Server {
                        status: status.as_u16(),
                    });
                }
            }
        }

        Err(last_error)
    }
}

/// `Retry-After` in whole seconds, one second when missing or unreadable.
pub fn retry_after_delay(headers: &HeaderMap) -> Duration {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(1))
}

/// `500ms * 2^attempt` plus up to 300ms of jitter.
pub fn backoff_duration(attempt: u32) -> Duration {
    let base = BACKOFF_BASE * 2u32.saturating_pow(attempt.min(16));
    let jitter = rand::rng().random_range(0..MAX_JITTER_MS);
    base + Duration::from_millis(jitter)
}
