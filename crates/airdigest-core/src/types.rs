//! Core data types shared across the airdigest crates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One scheduled program instance on a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Broadcast {
    /// Display title, already HTML-entity decoded.
    pub name: String,
    /// Start of the slot in 24-hour HH:MM form (UTC), empty when the source
    /// omits the timestamp.
    pub start_time: String,
    /// End of the slot in 24-hour HH:MM form (UTC), empty when the source
    /// omits the timestamp.
    pub end_time: String,
}

/// The result of fetching one channel for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSchedule {
    /// Human-readable channel label, e.g. "Channel 1".
    pub channel_name: String,
    /// Broadcasts in source order (chronological in practice), never
    /// re-sorted. Empty when the feed has no entry for the date.
    pub broadcasts: Vec<Broadcast>,
}

/// Per-run collection of successfully fetched channel schedules, keyed by
/// channel name. A channel whose fetch failed is simply absent.
pub type ScheduleSet = HashMap<String, ChannelSchedule>;
