//! JokeAPI client.
//!
//! Issues a single `GET {base_url}/joke/{category}` per call. The only query
//! parameters come from configuration (`safe-mode`, `blacklistFlags`); the
//! user's name never leaves the process.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::service::{FetchError, JokeService};
use super::types::{JokePayload, parse_joke};

pub const DEFAULT_JOKEAPI_BASE_URL: &str = "https://v2.jokeapi.dev";
pub const DEFAULT_CATEGORY: &str = "Any";

/// Fixed request options. Built from config, never from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeQuery {
    pub category: String,
    pub safe_mode: bool,
    pub blacklist_flags: Vec<String>,
}

impl Default for JokeQuery {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            safe_mode: false,
            blacklist_flags: Vec::new(),
        }
    }
}

impl JokeQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.safe_mode {
            params.push(("safe-mode", String::new()));
        }
        if !self.blacklist_flags.is_empty() {
            params.push(("blacklistFlags", self.blacklist_flags.join(",")));
        }
        params
    }
}

pub struct JokeApiClient {
    base_url: String,
    query: JokeQuery,
    client: reqwest::Client,
}

impl JokeApiClient {
    pub fn new(base_url: Option<String>, query: JokeQuery) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_JOKEAPI_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            query,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/joke/{}", self.base_url, self.query.category)
    }
}

#[async_trait]
impl JokeService for JokeApiClient {
    fn name(&self) -> &str {
        "jokeapi"
    }

    async fn fetch_joke(&self) -> Result<JokePayload, FetchError> {
        let url = self.endpoint();
        let params = self.query.params();
        info!("JokeAPI request: GET {} (params={:?})", url, params);

        let mut request = self.client.get(&url);
        if !params.is_empty() {
            request = request.query(&params);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("JokeAPI response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("JokeAPI error: {} - {}", status, err_body);
            return Err(FetchError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("JokeAPI body: {} bytes", body.len());

        parse_joke(&body)
    }
}
