//! # airdigest notify
//! Push notification delivery via ntfy.

pub mod ntfy;

pub use ntfy::NtfyNotifier;
