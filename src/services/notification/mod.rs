//! User-facing notifications.
//!
//! The block provider raises a notification when the latest blocks cannot be
//! loaded. Delivery is fire-and-forget: a [`Notifier`] never reports failure back
//! to the code that raised the notification.

use std::time::Duration;

mod channel;
mod log;

pub use channel::ChannelNotifier;
pub use log::TracingNotifier;

/// A message to show the user for a limited time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	pub message: String,
	pub duration: Duration,
}

/// Delivers notifications to whoever presents them
pub trait Notifier: Send + Sync {
	/// Hands `message` off for display during `duration`. Must not block.
	fn notify(&self, message: &str, duration: Duration);
}
