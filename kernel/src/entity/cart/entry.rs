use serde::{Deserialize, Serialize};
use vodca::References;

use crate::entity::BookRecord;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References)]
pub struct CartEntry {
    book: BookRecord,
}

impl CartEntry {
    pub fn new(book: BookRecord) -> Self {
        Self { book }
    }
}
