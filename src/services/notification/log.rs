use std::time::Duration;

use crate::services::notification::Notifier;

/// Writes notifications to the log. Used by the CLI, which has no toast surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
	fn notify(&self, message: &str, duration: Duration) {
		tracing::warn!(
			duration_ms = duration.as_millis() as u64,
			"{}",
			message
		);
	}
}
