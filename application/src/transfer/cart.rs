use kernel::prelude::entity::{BookRecord, BookTitle, Cart, DestructCart};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CartDto {
    pub id: Uuid,
    pub entries: Vec<BookRecord>,
    pub total: u64,
}

impl From<Cart> for CartDto {
    fn from(value: Cart) -> Self {
        let total = value.total();
        let DestructCart { id, entries } = value.into_destruct();
        Self {
            id: id.into(),
            entries: entries
                .into_iter()
                .map(|entry| entry.book().clone())
                .collect(),
            total,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CheckoutDto {
    /// Nothing to check out; the cart was left untouched.
    Rejected,
    Completed { titles: Vec<BookTitle>, total: u64 },
}

pub struct GetCartDto {
    pub id: Uuid,
}

pub struct AddToCartDto {
    pub id: Uuid,
    pub book: BookRecord,
}

pub struct RemoveFromCartDto {
    pub id: Uuid,
    pub index: usize,
}
