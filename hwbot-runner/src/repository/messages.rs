//! Messages repository
//!
//! Delivers text messages to the configured Telegram chat.

use async_trait::async_trait;
use hwbot_client::{Result, TelegramClient};

/// Repository trait for outbound messages
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Sends a plain-text message to the fixed recipient
    async fn send_message(&self, text: &str) -> Result<()>;
}

/// Telegram implementation of MessageRepository
pub struct HttpMessageRepository {
    client: TelegramClient,
    chat_id: String,
}

impl HttpMessageRepository {
    /// Creates a new Telegram message repository
    ///
    /// # Arguments
    /// * `client` - Bot API client
    /// * `chat_id` - Chat that receives every message
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl MessageRepository for HttpMessageRepository {
    async fn send_message(&self, text: &str) -> Result<()> {
        self.client.send_message(&self.chat_id, text).await
    }
}
