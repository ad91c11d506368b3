//! Homework review API

use hwbot_core::dto::statuses::StatusesQuery;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use std::fmt;
use tracing::debug;

use crate::error::Result;
use crate::handle_response;

/// Homework statuses endpoint of the review API
pub const DEFAULT_STATUSES_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// HTTP client for the homework review API
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the statuses endpoint (the trailing slash is significant)
    endpoint: String,
    /// OAuth token of the student
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new review API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the statuses endpoint
    /// * `token` - OAuth token sent as `Authorization: OAuth <token>`
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new review API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp, sent as the `from_date` query parameter
    ///
    /// # Returns
    /// The decoded JSON body, unvalidated. Shape checks are the caller's job.
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&StatusesQuery { from_date })
            .send()
            .await?;

        handle_response(response).await
    }
}

impl fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
