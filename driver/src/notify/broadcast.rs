use kernel::interface::notify::NotificationPublisher;
use kernel::prelude::entity::Notification;
use tokio::sync::broadcast::{self, Receiver, Sender};
use tracing::debug;

const DEFAULT_CAPACITY: usize = 64;

/// Fans notifications out to every subscribed presenter.
#[derive(Clone)]
pub struct BroadcastNotifier {
    sender: Sender<Notification>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> Receiver<Notification> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl NotificationPublisher for BroadcastNotifier {
    fn publish(&self, notification: Notification) {
        if let Err(error) = self.sender.send(notification) {
            debug!(notification = ?error.0, "no notification subscribers");
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::notify::NotificationPublisher;
    use kernel::prelude::entity::{CartId, Notification};

    use crate::notify::BroadcastNotifier;

    #[tokio::test]
    async fn delivers_to_subscribers() {
        let notifier = BroadcastNotifier::default();
        let cart = CartId::new(uuid::Uuid::new_v4());

        notifier.publish(Notification::CheckoutRejected { cart });

        let mut receiver = notifier.subscribe();
        notifier.publish(Notification::CheckoutRejected { cart });
        let received = receiver.recv().await.unwrap();
        assert_eq!(received, Notification::CheckoutRejected { cart });
    }
}
