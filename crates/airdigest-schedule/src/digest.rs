//! Digest rendering: a pure transform from fetched schedules to message text.

use airdigest_core::types::{Broadcast, ScheduleSet};
use chrono::NaiveDate;

/// Line rendered for a channel with nothing scheduled.
const NO_BROADCASTS_LINE: &str = "  No broadcasts scheduled";
/// Separator between upcoming and already-finished shows.
const EARLIER_SEPARATOR: &str = "  ┄┄┄ earlier ┄┄┄";

/// Split broadcasts into (upcoming, earlier) around the cutoff time.
///
/// Zero-padded HH:MM strings sort the same way as the times they denote, so
/// a plain string comparison is the whole test. Every broadcast lands in
/// exactly one group and relative order is preserved on both sides; an empty
/// start time sorts before any cutoff and counts as earlier.
pub fn partition_by_cutoff<'a>(
    broadcasts: &'a [Broadcast],
    cutoff: &str,
) -> (Vec<&'a Broadcast>, Vec<&'a Broadcast>) {
    broadcasts
        .iter()
        .partition(|broadcast| broadcast.start_time.as_str() >= cutoff)
}

/// Render the full digest for one day.
///
/// Channel sections appear in lexicographic channel-name order regardless of
/// how the set was assembled. Within a section, upcoming shows come first
/// and earlier ones follow the separator, each group in source order. The
/// output is deterministic for a given input.
pub fn format_digest(schedules: &ScheduleSet, date: NaiveDate, cutoff: &str) -> String {
    let date_str = date.format("%a %d %b").to_string().to_lowercase();
    let mut lines = vec![format!("🎵 {date_str}"), String::new()];

    let mut channel_names: Vec<&String> = schedules.keys().collect();
    channel_names.sort();

    for name in channel_names {
        let channel = &schedules[name];
        lines.push(channel.channel_name.to_uppercase());

        if channel.broadcasts.is_empty() {
            lines.push(NO_BROADCASTS_LINE.into());
        } else {
            let (upcoming, earlier) = partition_by_cutoff(&channel.broadcasts, cutoff);
            for broadcast in upcoming {
                lines.push(render_line(broadcast));
            }
            if !earlier.is_empty() {
                lines.push(EARLIER_SEPARATOR.into());
                for broadcast in earlier {
                    lines.push(render_line(broadcast));
                }
            }
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

fn render_line(broadcast: &Broadcast) -> String {
    format!(
        "  {}-{}  {}",
        broadcast.start_time, broadcast.end_time, broadcast.name
    )
}
