//! # airdigest schedule
//! Fetching, aggregation, and digest rendering for the daily schedule.

pub mod aggregate;
pub mod client;
pub mod digest;
pub mod entities;

pub use aggregate::{CHANNELS, fetch_all};
pub use client::ScheduleClient;
pub use digest::{format_digest, partition_by_cutoff};
