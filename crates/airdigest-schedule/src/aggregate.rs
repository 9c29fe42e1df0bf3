//! Per-channel fetch fan-out with partial-failure tolerance.

use airdigest_core::types::ScheduleSet;
use chrono::NaiveDate;

use crate::client::ScheduleClient;

/// The fixed set of channels the digest covers.
pub const CHANNELS: [u8; 2] = [1, 2];

/// Fetch every configured channel sequentially, collecting successes into
/// the schedule set.
///
/// A failed channel is logged and omitted, so the returned set can be
/// partial or, when every channel fails, empty. The failure count lets the
/// caller report how much of the day went missing.
pub async fn fetch_all(client: &ScheduleClient, target_date: NaiveDate) -> (ScheduleSet, usize) {
    let mut schedules = ScheduleSet::new();
    let mut failures = 0;

    for channel in CHANNELS {
        match client.fetch_channel(channel, target_date).await {
            Ok(schedule) => {
                schedules.insert(schedule.channel_name.clone(), schedule);
            }
            Err(e) => {
                failures += 1;
                tracing::error!("Failed to fetch Channel {channel}: {e}");
            }
        }
    }

    (schedules, failures)
}
