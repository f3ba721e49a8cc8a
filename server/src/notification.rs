use kernel::prelude::entity::Notification;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::broadcast::Receiver;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Presents cart notifications to the shopper. Here that means the log.
pub fn spawn_presenter(mut receiver: Receiver<Notification>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(notification) => {
                    info!(target: "notification", cart = ?notification.cart(), "{}", message(&notification))
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(target: "notification", skipped, "notification presenter lagged")
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

pub fn message(notification: &Notification) -> String {
    match notification {
        Notification::AddedToCart { title, .. } => {
            let title: &String = title.as_ref();
            format!("{title} ditambahkan ke keranjang!")
        }
        Notification::CheckoutRejected { .. } => "Keranjang kosong.".to_string(),
        Notification::CheckoutCompleted { titles, .. } => {
            let titles = titles
                .iter()
                .map(|title| AsRef::<String>::as_ref(title).as_str())
                .collect::<Vec<_>>()
                .join("\n- ");
            format!("Checkout berhasil. Buku yang dibeli:\n- {titles}")
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{BookTitle, CartId, Notification};

    use super::message;

    #[test]
    fn renders_shopper_messages() {
        let cart = CartId::new(uuid::Uuid::new_v4());
        assert_eq!(
            message(&Notification::AddedToCart {
                cart,
                title: BookTitle::new("Laskar Pelangi"),
            }),
            "Laskar Pelangi ditambahkan ke keranjang!"
        );
        assert_eq!(
            message(&Notification::CheckoutRejected { cart }),
            "Keranjang kosong."
        );
        assert_eq!(
            message(&Notification::CheckoutCompleted {
                cart,
                titles: vec![BookTitle::new("A"), BookTitle::new("B")],
                total: 180_000,
            }),
            "Checkout berhasil. Buku yang dibeli:\n- A\n- B"
        );
    }
}
