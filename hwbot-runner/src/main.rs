//! Homework Bot
//!
//! A long-running poller that watches the review status of the student's
//! latest homework submission and forwards changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: secrets from the environment (optionally via `.env`)
//! - Repositories: HTTP access to the review API and the Telegram Bot API
//! - Services: best-effort notification delivery
//! - Scheduler: the fixed-interval poll loop and its in-memory state

mod config;
mod error;
mod repository;
mod scheduler;
mod service;

use anyhow::Result;
use hwbot_client::{PracticumClient, TelegramClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, ConfigError};
use crate::repository::{HttpMessageRepository, HttpStatusRepository};
use crate::scheduler::{PollState, StatusPoller};
use crate::service::StandardNotificationService;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "homework_bot.log";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let _log_guard = init_logging();

    info!("Starting Homework Bot");

    // Missing secrets end the process before any client exists
    let config = load_config()?;
    info!(
        "Loaded configuration: chat_id={}, endpoint={}",
        config.telegram_chat_id, config.statuses_endpoint
    );

    let statuses = Arc::new(HttpStatusRepository::new(PracticumClient::new(
        config.statuses_endpoint.clone(),
        config.practicum_token.clone(),
    )));
    let messages = Arc::new(HttpMessageRepository::new(
        TelegramClient::new(config.telegram_api_url.clone(), config.telegram_token.clone()),
        config.telegram_chat_id.clone(),
    ));
    let notifications = Arc::new(StandardNotificationService::new(messages));

    let poller = StatusPoller::new(config, statuses, notifications);
    let state = PollState::new(chrono::Utc::now().timestamp());

    poller.run(state).await;

    Ok(())
}

/// Logs to stdout and to a daily rolling file under `logs/`
fn init_logging() -> WorkerGuard {
    std::fs::create_dir_all(LOG_DIR).ok();

    let file_appender = rolling::daily(LOG_DIR, LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=info,hwbot_client=info".into()),
        )
        .with(fmt::layer())
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

/// Loads and validates configuration, logging every missing secret
fn load_config() -> Result<Config> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            let ConfigError::Missing(names) = &e;
            for name in names {
                error!(critical = true, "Missing required environment variable: {}", name);
            }
            return Err(e.into());
        }
    };

    config.validate()?;
    Ok(config)
}
