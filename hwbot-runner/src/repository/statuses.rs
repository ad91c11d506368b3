//! Statuses repository
//!
//! Fetches homework statuses from the review API.

use async_trait::async_trait;
use hwbot_client::{PracticumClient, Result};
use serde_json::Value;

/// Repository trait for reading review statuses
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches the raw statuses response
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp lower bound for listed submissions
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: PracticumClient,
}

impl HttpStatusRepository {
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value> {
        self.client.homework_statuses(from_date).await
    }
}
