use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Whole currency units; there is no minor unit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookPrice(u32);

impl BookPrice {
    pub fn new(price: impl Into<u32>) -> Self {
        Self(price.into())
    }
}
