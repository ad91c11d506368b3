//! Data Transfer Objects for the external APIs
//!
//! Request and response payloads exchanged with the homework review API
//! and the Telegram Bot API. The review API response itself is handled as
//! raw JSON by [`crate::extract`], since its shape must be validated
//! before anything is trusted.

pub mod statuses;
pub mod telegram;
