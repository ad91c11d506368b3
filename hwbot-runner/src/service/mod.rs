//! Service layer
//!
//! Services hold the bot's side-effecting policies on top of repositories.
//!
//! All services are trait-based to enable testing and dependency injection.

mod notification;

// Re-export traits
pub use notification::NotificationService;

// Re-export implementations
pub use notification::StandardNotificationService;
