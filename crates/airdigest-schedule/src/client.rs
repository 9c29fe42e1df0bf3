//! Remote schedule API client.

use airdigest_core::config::{DigestConfig, REQUEST_TIMEOUT_SECS};
use airdigest_core::error::{DigestError, Result};
use airdigest_core::types::{Broadcast, ChannelSchedule};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::entities::decode_entities;

/// Placeholder title when the source omits one.
const UNKNOWN_TITLE: &str = "Unknown";

// --- Schedule feed wire types ---

#[derive(Debug, Deserialize)]
struct ScheduleFeed {
    /// One entry per calendar date. Required: a feed without it is a
    /// contract violation, not an empty day.
    results: Vec<DaySchedule>,
}

#[derive(Debug, Deserialize)]
struct DaySchedule {
    #[serde(default)]
    date: String,
    #[serde(default)]
    broadcasts: Vec<RawBroadcast>,
}

#[derive(Debug, Deserialize)]
struct RawBroadcast {
    broadcast_title: Option<String>,
    start_timestamp: Option<String>,
    end_timestamp: Option<String>,
}

/// HTTP client for the schedule API.
pub struct ScheduleClient {
    api_base: String,
    client: reqwest::Client,
}

impl ScheduleClient {
    pub fn new(config: &DigestConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| DigestError::http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_base: config.api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch one channel's schedule feed and keep only the target date's
    /// broadcasts.
    ///
    /// A feed with no entry for the target date is an empty schedule, not an
    /// error; transport, HTTP-status, and decode failures are.
    pub async fn fetch_channel(
        &self,
        channel: u8,
        target_date: NaiveDate,
    ) -> Result<ChannelSchedule> {
        let url = format!("{}/radio/schedule/{channel}", self.api_base);
        let channel_name = format!("Channel {channel}");
        let target = target_date.format("%Y-%m-%d").to_string();

        tracing::info!("Fetching {channel_name} schedule from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DigestError::fetch(&channel_name, format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(DigestError::fetch(&channel_name, format!("HTTP {status}")));
        }

        let feed: ScheduleFeed = response
            .json()
            .await
            .map_err(|e| DigestError::fetch(&channel_name, format!("invalid schedule feed: {e}")))?;

        let broadcasts = match feed.results.into_iter().find(|day| day.date == target) {
            Some(day) => day
                .broadcasts
                .into_iter()
                .map(|raw| raw.into_broadcast(&channel_name))
                .collect::<Result<Vec<_>>>()?,
            None => {
                tracing::debug!("No feed entry for {channel_name} on {target}");
                Vec::new()
            }
        };

        tracing::info!(
            "Found {} broadcasts for {channel_name} on {target}",
            broadcasts.len()
        );

        Ok(ChannelSchedule {
            channel_name,
            broadcasts,
        })
    }
}

impl RawBroadcast {
    fn into_broadcast(self, channel_name: &str) -> Result<Broadcast> {
        let name = self
            .broadcast_title
            .map(|title| decode_entities(&title))
            .unwrap_or_else(|| UNKNOWN_TITLE.into());

        Ok(Broadcast {
            name,
            start_time: time_of_day(self.start_timestamp.as_deref(), channel_name)?,
            end_time: time_of_day(self.end_timestamp.as_deref(), channel_name)?,
        })
    }
}

/// Convert an ISO-8601 timestamp (Z or explicit offset) into an HH:MM UTC
/// time-of-day string. A missing timestamp yields an empty string.
fn time_of_day(timestamp: Option<&str>, channel_name: &str) -> Result<String> {
    match timestamp {
        None | Some("") => Ok(String::new()),
        Some(ts) => {
            let parsed = DateTime::parse_from_rfc3339(ts).map_err(|e| {
                DigestError::fetch(channel_name, format!("bad timestamp '{ts}': {e}"))
            })?;
            Ok(parsed.with_timezone(&Utc).format("%H:%M").to_string())
        }
    }
}
