//! Runtime configuration, resolved once from the environment at startup.

use crate::error::{DigestError, Result};

/// ntfy server used when NTFY_SERVER is not set.
pub const DEFAULT_NTFY_SERVER: &str = "https://ntfy.sh";
/// Cutoff splitting the digest into upcoming and earlier shows.
pub const DEFAULT_CUTOFF: &str = "07:00";
/// Schedule API base used when SCHEDULE_API_BASE is not set.
pub const DEFAULT_API_BASE: &str = "https://www.nts.live/api/v2";
/// Timeout applied to every outbound HTTP request. No retries.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Immutable process-wide settings, built once in main and passed by
/// reference into each component.
#[derive(Debug, Clone)]
pub struct DigestConfig {
    /// ntfy topic the digest is published to. Required.
    pub topic: String,
    /// ntfy server base URL.
    pub server: String,
    /// Cutoff time in HH:MM form.
    pub cutoff: String,
    /// Schedule API base URL.
    pub api_base: String,
}

impl DigestConfig {
    /// Resolve configuration from environment variables.
    ///
    /// NTFY_TOPIC is required; NTFY_SERVER, NOTIFICATION_TIME and
    /// SCHEDULE_API_BASE fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        Self::build(
            std::env::var("NTFY_TOPIC").ok(),
            std::env::var("NTFY_SERVER").ok(),
            std::env::var("NOTIFICATION_TIME").ok(),
            std::env::var("SCHEDULE_API_BASE").ok(),
        )
    }

    fn build(
        topic: Option<String>,
        server: Option<String>,
        cutoff: Option<String>,
        api_base: Option<String>,
    ) -> Result<Self> {
        let topic = topic
            .filter(|t| !t.is_empty())
            .ok_or_else(|| DigestError::config("NTFY_TOPIC must be set"))?;

        let cutoff = cutoff.unwrap_or_else(|| DEFAULT_CUTOFF.into());
        if !is_valid_cutoff(&cutoff) {
            return Err(DigestError::config(format!(
                "NOTIFICATION_TIME must be HH:MM, got '{cutoff}'"
            )));
        }

        Ok(Self {
            topic,
            server: server.unwrap_or_else(|| DEFAULT_NTFY_SERVER.into()),
            cutoff,
            api_base: api_base.unwrap_or_else(|| DEFAULT_API_BASE.into()),
        })
    }
}

/// The digest partition compares HH:MM strings lexicographically, which only
/// matches time-of-day order for zero-padded values. Reject anything else at
/// startup.
fn is_valid_cutoff(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    let (hours, minutes) = (&value[..2], &value[3..]);
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    all_digits(hours) && all_digits(minutes) && hours < "24" && minutes < "60"
}
