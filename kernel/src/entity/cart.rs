mod entry;
mod id;

pub use self::{entry::*, id::*};
use crate::entity::{BookRecord, BookTitle};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

/// Ordered list of owned book copies. Adding the same book twice yields two entries.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Cart {
    id: CartId,
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, book: BookRecord) {
        self.entries.push(CartEntry::new(book));
    }

    pub fn remove(&mut self, index: usize) -> Option<CartEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) -> Vec<CartEntry> {
        std::mem::take(&mut self.entries)
    }

    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(u32::from(*entry.book().price())))
            .sum()
    }

    pub fn titles(&self) -> Vec<BookTitle> {
        self.entries
            .iter()
            .map(|entry| entry.book().title().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
