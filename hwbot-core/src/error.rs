//! Errors raised while interpreting a review API response

use thiserror::Error;

/// Result type alias for response interpretation
pub type Result<T> = std::result::Result<T, ResponseError>;

/// The response was fetched and decoded but cannot be turned into a message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// Missing key or wrong JSON shape
    #[error("Некорректный ответ API: {0}")]
    Schema(String),

    /// The `homeworks` list is present but empty
    #[error("Список домашних работ пуст")]
    NoSubmissions,

    /// Status code outside the known set
    #[error("Неизвестный статус работы: {0}")]
    UnknownStatus(String),
}

impl ResponseError {
    /// Create a schema error with the given description
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }
}
