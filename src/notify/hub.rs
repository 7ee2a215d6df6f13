//! NotificationHub — broadcast fan-out to every connected stream.

use tokio::sync::broadcast;
use tracing::{debug, info};

use super::model::Notification;

/// Default broadcast channel capacity.
const DEFAULT_CAPACITY: usize = 256;

/// Fan-out hub for server-push notifications.
///
/// Cheap to clone; all clones share one broadcast channel. Publishing is
/// lossy when nobody is subscribed, which is the normal idle state.
#[derive(Clone)]
pub struct NotificationHub {
    tx: broadcast::Sender<Notification>,
}

impl NotificationHub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity.max(1));
        info!(capacity, "Notification hub initialized");
        Self { tx }
    }

    /// Publish to all current subscribers.
    pub fn publish(&self, notification: Notification) {
        debug!(
            id = %notification.id,
            kind = %notification.kind,
            subscribers = self.subscriber_count(),
            "Publishing notification"
        );
        let _ = self.tx.send(notification);
    }

    /// Subscribe to the live stream. Each SSE connection calls this once.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Number of currently connected subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
