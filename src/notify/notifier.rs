use tokio::sync::mpsc;
use tracing::{info, warn};

use super::{Notification, NotificationLevel};

/// Fire-and-forget sink for user-visible messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.level {
            NotificationLevel::Success => info!(target: "cart_notifications", "{}", notification.message),
            NotificationLevel::Error => warn!(target: "cart_notifications", "{}", notification.message),
        }
    }
}

/// Forwards notifications to whoever holds the receiving end, e.g. a UI task.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: &Notification) {
        // Nobody listening is fine.
        let _ = self.sender.send(notification.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_notifier_ignores_closed_receiver() {
        let (notifier, receiver) = ChannelNotifier::channel();
        drop(receiver);

        notifier.notify(&Notification::success("still fine"));
    }
}
