//! # airdigest
//!
//! Fetches the daily NTS Radio schedule (Channel 1 & 2), renders it into a
//! digest split around a cutoff time, and pushes it to an ntfy topic.
//! Designed to be run once a day from cron on an always-on machine.

use airdigest::{best_effort_error_notification, run};
use airdigest_core::{DigestConfig, DigestError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Settings may live in a .env next to the binary; absence is fine.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match DigestConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Startup failed: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("airdigest starting");
    tracing::info!("NTFY_TOPIC: {}", config.topic);
    tracing::info!("NTFY_SERVER: {}", config.server);
    tracing::info!("NOTIFICATION_TIME: {}", config.cutoff);

    match run(&config).await {
        Ok(()) => {
            tracing::info!("Schedule notification sent successfully");
            std::process::exit(0);
        }
        Err(e @ (DigestError::AggregateEmpty | DigestError::Dispatch(_))) => {
            // Logged and, where reachable, already notified inside run().
            tracing::error!("{e}");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Unexpected error: {e}");
            best_effort_error_notification(&config, &e).await;
            std::process::exit(1);
        }
    }
}
