use serde::Serialize;

use crate::entity::{BookTitle, CartId};

/// Shopper-facing messages emitted by cart operations.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    AddedToCart {
        cart: CartId,
        title: BookTitle,
    },
    CheckoutRejected {
        cart: CartId,
    },
    CheckoutCompleted {
        cart: CartId,
        titles: Vec<BookTitle>,
        total: u64,
    },
}

impl Notification {
    pub fn cart(&self) -> &CartId {
        match self {
            Notification::AddedToCart { cart, .. }
            | Notification::CheckoutRejected { cart }
            | Notification::CheckoutCompleted { cart, .. } => cart,
        }
    }
}
