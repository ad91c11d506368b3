//! Homework Bot HTTP Clients
//!
//! Thin, typed HTTP clients for the two external services the bot talks to:
//! - [`PracticumClient`]: the homework review API (status polling)
//! - [`TelegramClient`]: the Telegram Bot API (message delivery)
//!
//! # Example
//!
//! ```no_run
//! use hwbot_client::{PracticumClient, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> hwbot_client::Result<()> {
//!     let practicum = PracticumClient::new(hwbot_client::DEFAULT_STATUSES_ENDPOINT, "api-token");
//!     let response = practicum.homework_statuses(1700000000).await?;
//!
//!     let telegram = TelegramClient::new(hwbot_client::DEFAULT_TELEGRAM_API, "bot-token");
//!     telegram.send_message("123456", &response.to_string()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

#[cfg(test)]
mod test_server;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::{DEFAULT_STATUSES_ENDPOINT, PracticumClient};
pub use telegram::{DEFAULT_TELEGRAM_API, TelegramClient};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

// =============================================================================
// Response Handlers
// =============================================================================

/// Handle an API response and deserialize JSON
///
/// Any status other than 200 OK becomes [`ClientError::UnexpectedStatus`]. The body is
/// read in full before decoding so that a broken connection is reported as
/// a transport failure and a broken body as a decode failure. Request URLs
/// are stripped from transport errors since the Bot API embeds its token there.
async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if status != StatusCode::OK {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        debug!("Unexpected status {}: {}", status, error_text);
        return Err(ClientError::unexpected_status(status.as_u16(), error_text));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| ClientError::Transport(e.without_url()))?;

    serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
}
