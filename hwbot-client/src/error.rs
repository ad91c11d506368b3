//! Error types for the API clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review API or the Bot API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection failed or the body could not be read
    #[error("Ошибка запроса к API: {0}")]
    Transport(#[from] reqwest::Error),

    /// API answered with anything but 200 OK
    ///
    /// Only the code is displayed: the body may differ between otherwise
    /// identical failures and can be arbitrarily long.
    #[error("Эндпоинт вернул код {status}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Response body is not valid JSON
    #[error("Ошибка декодирования JSON: {0}")]
    Decode(String),
}

impl ClientError {
    /// Create an unexpected status error from status code and body
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_mentions_code() {
        let err = ClientError::unexpected_status(503, "Service Unavailable");
        assert_eq!(err.to_string(), "Эндпоинт вернул код 503");
    }

    #[test]
    fn test_unexpected_status_display_ignores_body() {
        let first = ClientError::unexpected_status(502, "<html>request id 1a2b</html>");
        let second = ClientError::unexpected_status(502, "<html>request id 3c4d</html>".repeat(500));
        assert_eq!(first.to_string(), second.to_string());
        assert!(!first.to_string().contains("request id"));
    }
}
