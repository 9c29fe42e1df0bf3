//! Pipeline orchestration: fetch, format, dispatch, and the error path.
//!
//! One run walks fetch → (all-failed | format) → dispatch. Per-channel fetch
//! failures never abort the run; only an empty aggregate or a failed dispatch
//! surface as errors, and both have already been logged (and, where a
//! notification was possible, notified) by the time they reach the caller.

use airdigest_core::{DigestConfig, DigestError};
use airdigest_notify::NtfyNotifier;
use airdigest_schedule::{ScheduleClient, fetch_all, format_digest};
use chrono::Utc;

/// Notification title for the daily digest.
pub const DIGEST_TITLE: &str = "NTS Daily Schedule";
/// Notification title for the failure paths.
pub const ERROR_TITLE: &str = "NTS Schedule Error";

/// Execute one digest run for today's date.
pub async fn run(config: &DigestConfig) -> Result<(), DigestError> {
    let client = ScheduleClient::new(config)?;
    let notifier = NtfyNotifier::new(config)?;

    let today = Utc::now().date_naive();
    let (schedules, failures) = fetch_all(&client, today).await;

    if schedules.is_empty() {
        tracing::warn!("No schedule data returned ({failures} channels failed)");
        notifier
            .dispatch(
                "⚠️ Could not fetch NTS schedule - no data returned",
                ERROR_TITLE,
            )
            .await;
        return Err(DigestError::AggregateEmpty);
    }

    let message = format_digest(&schedules, today, &config.cutoff);
    tracing::info!("Formatted message:\n{message}");

    if notifier.dispatch(&message, DIGEST_TITLE).await {
        Ok(())
    } else {
        Err(DigestError::dispatch("notification send failed"))
    }
}

/// Last-ditch attempt to surface an unexpected failure as a notification.
/// Its own failure is only logged.
pub async fn best_effort_error_notification(config: &DigestConfig, error: &DigestError) {
    if let Ok(notifier) = NtfyNotifier::new(config) {
        notifier
            .dispatch(&format!("⚠️ airdigest error: {error}"), ERROR_TITLE)
            .await;
    }
}
