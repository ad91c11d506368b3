//! Status poller
//!
//! Polls the review API for the latest submission and notifies the student
//! whenever its status message changes. Failures of an iteration are
//! reported through the same channel, de-duplicated the same way.

use hwbot_core::extract::{current_date, latest_submission, parse_status};
use std::sync::Arc;
use tokio::time;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::PollError;
use crate::repository::StatusRepository;
use crate::scheduler::state::PollState;
use crate::service::NotificationService;

/// Prefix of every failure notification
const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Poller that checks the latest submission on a fixed interval
pub struct StatusPoller {
    config: Config,
    statuses: Arc<dyn StatusRepository>,
    notifications: Arc<dyn NotificationService>,
}

impl StatusPoller {
    /// Creates a new status poller
    pub fn new(
        config: Config,
        statuses: Arc<dyn StatusRepository>,
        notifications: Arc<dyn NotificationService>,
    ) -> Self {
        Self {
            config,
            statuses,
            notifications,
        }
    }

    /// Starts the polling loop
    ///
    /// Runs until the process is terminated. The first poll happens
    /// immediately; each later poll starts a full interval after the previous
    /// iteration finished, so a stalled request delays everything after it.
    pub async fn run(&self, mut state: PollState) {
        info!(
            "Starting status poller (interval: {:?}, since: {})",
            self.config.poll_interval,
            state.since()
        );

        loop {
            self.run_iteration(&mut state).await;
            time::sleep(self.config.poll_interval).await;
        }
    }

    /// Performs a single poll iteration, including notification
    pub async fn run_iteration(&self, state: &mut PollState) {
        debug!("Polling homework statuses from_date={}", state.from_date());

        match self.check_once(state).await {
            Ok(message) => {
                if !state.is_new_status(&message) {
                    debug!("Status unchanged, nothing to send");
                    return;
                }
                if self.notifications.notify(&message).await {
                    state.record_status(message);
                }
            }
            Err(e) => {
                error!(kind = ?e.kind(), details = ?e, "Poll iteration failed: {}", e);

                let message = format!("{}: {}", FAILURE_PREFIX, e);
                if !state.is_new_error(&message) {
                    debug!("Same failure already reported, nothing to send");
                    return;
                }
                if self.notifications.notify(&message).await {
                    state.record_error(message);
                }
            }
        }
    }

    /// Fetches, validates and parses; no side effects besides `since`
    async fn check_once(&self, state: &mut PollState) -> Result<String, PollError> {
        let response = self.statuses.fetch_statuses(state.from_date()).await?;
        state.advance(current_date(&response));

        let record = latest_submission(&response)?;
        Ok(parse_status(record)?)
    }
}
