use crate::entity::Notification;

/// Hands notifications to whoever presents them. Publishing never fails the caller.
pub trait NotificationPublisher: 'static + Sync + Send {
    fn publish(&self, notification: Notification);
}

pub trait DependOnNotificationPublisher: 'static + Sync + Send {
    type NotificationPublisher: NotificationPublisher;
    fn notification_publisher(&self) -> &Self::NotificationPublisher;
}
