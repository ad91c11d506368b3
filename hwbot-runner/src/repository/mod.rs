//! Repository layer
//!
//! Repositories are stateless wrappers around the HTTP clients. They give
//! the poller narrow, trait-based seams so tests can substitute in-memory
//! doubles for the review API and Telegram.

mod messages;
mod statuses;

// Re-export traits
pub use messages::MessageRepository;
pub use statuses::StatusRepository;

// Re-export implementations
pub use messages::HttpMessageRepository;
pub use statuses::HttpStatusRepository;
