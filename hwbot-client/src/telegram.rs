//! Telegram Bot API

use hwbot_core::dto::telegram::{SendMessage, TelegramResponse};
use reqwest::Client;
use std::fmt;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::handle_response;

/// Public Bot API base URL
pub const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    base_url: String,
    /// Bot token, part of every method URL
    token: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a new Bot API client
    ///
    /// # Arguments
    /// * `base_url` - The Bot API base URL
    /// * `token` - The bot token issued by BotFather
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(base_url, token, Client::new())
    }

    /// Create a new Bot API client with a custom HTTP client
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Send a plain-text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Destination chat identifier
    /// * `text` - Message text
    ///
    /// An `ok: false` envelope is reported as [`ClientError::UnexpectedStatus`]
    /// carrying the Bot API `error_code`, even when the HTTP status was 2xx.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        debug!("Sending Telegram message to chat {}", chat_id);

        let response = self
            .client
            .post(&url)
            .json(&SendMessage {
                chat_id: chat_id.to_string(),
                text: text.to_string(),
            })
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.without_url()))?;

        let status = response.status().as_u16();
        let envelope: TelegramResponse = handle_response(response).await?;

        if !envelope.ok {
            return Err(ClientError::unexpected_status(
                envelope.error_code.unwrap_or(status),
                envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
