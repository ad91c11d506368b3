//! Scheduler layer for the bot
//!
//! This layer runs the poll loop: fetch the latest review status on a
//! fixed interval, notify on change, and report failures without spamming.

pub mod poller;
pub mod state;

pub use poller::StatusPoller;
pub use state::PollState;
