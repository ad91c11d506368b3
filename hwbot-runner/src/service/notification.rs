//! Notification service
//!
//! Best-effort delivery of messages to the operator. A failed send is
//! logged and dropped; it never becomes an error of the caller.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::repository::MessageRepository;

/// Service trait for notifying the student
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Attempts to deliver `message`
    ///
    /// # Returns
    /// `true` if the message was delivered
    async fn notify(&self, message: &str) -> bool;
}

/// Standard implementation of NotificationService
pub struct StandardNotificationService {
    messages: Arc<dyn MessageRepository>,
}

impl StandardNotificationService {
    /// Creates a new notification service
    ///
    /// # Arguments
    /// * `messages` - Repository used for delivery
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl NotificationService for StandardNotificationService {
    async fn notify(&self, message: &str) -> bool {
        match self.messages.send_message(message).await {
            Ok(()) => {
                info!("Message sent: {}", message);
                true
            }
            Err(e) => {
                error!("Failed to send message: {}", e);
                false
            }
        }
    }
}
