//! Telegram Bot API DTOs

use serde::{Deserialize, Serialize};

/// `sendMessage` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessage {
    pub chat_id: String,
    pub text: String,
}

/// Envelope wrapping every Bot API response
///
/// Only success and the failure description are consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<u16>,
}
