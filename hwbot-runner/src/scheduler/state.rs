//! Poll state
//!
//! In-memory record threaded through iterations. It is owned by the poll
//! loop and lost on restart.

/// Mutable state of the poll loop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Last status message successfully delivered
    last_status_message: Option<String>,
    /// Last error message successfully delivered
    last_error_message: Option<String>,
    /// Lower bound (Unix seconds) for the next fetch; zero means "now"
    since: i64,
}

impl PollState {
    /// Creates a fresh state polling from `since`
    pub fn new(since: i64) -> Self {
        Self {
            since,
            ..Self::default()
        }
    }

    pub fn since(&self) -> i64 {
        self.since
    }

    /// Timestamp to send as `from_date`, falling back to the current time
    pub fn from_date(&self) -> i64 {
        if self.since > 0 {
            self.since
        } else {
            chrono::Utc::now().timestamp()
        }
    }

    /// Advances the fetch lower bound, keeping the old one when absent
    pub fn advance(&mut self, current_date: Option<i64>) {
        if let Some(current_date) = current_date {
            self.since = current_date;
        }
    }

    #[cfg(test)]
    pub fn last_status_message(&self) -> Option<&str> {
        self.last_status_message.as_deref()
    }

    #[cfg(test)]
    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    /// Whether `message` differs from the last delivered status message
    pub fn is_new_status(&self, message: &str) -> bool {
        self.last_status_message.as_deref() != Some(message)
    }

    /// Whether `message` differs from the last delivered error message
    pub fn is_new_error(&self, message: &str) -> bool {
        self.last_error_message.as_deref() != Some(message)
    }

    pub fn record_status(&mut self, message: String) {
        self.last_status_message = Some(message);
    }

    pub fn record_error(&mut self, message: String) {
        self.last_error_message = Some(message);
    }
}
