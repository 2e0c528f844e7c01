use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::services::notification::{Notification, Notifier};

/// Forwards notifications over an unbounded channel to a presenting task.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
	sender: UnboundedSender<Notification>,
}

impl ChannelNotifier {
	pub fn new(sender: UnboundedSender<Notification>) -> Self {
		Self { sender }
	}

	/// Creates a notifier together with the receiving end
	pub fn channel() -> (Self, UnboundedReceiver<Notification>) {
		let (sender, receiver) = unbounded_channel();
		(Self::new(sender), receiver)
	}
}

impl Notifier for ChannelNotifier {
	fn notify(&self, message: &str, duration: Duration) {
		let notification = Notification {
			message: message.to_string(),
			duration,
		};

		if self.sender.send(notification).is_err() {
			tracing::debug!("Notification receiver dropped, discarding: {}", message);
		}
	}
}
