use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookAuthor(String);

impl BookAuthor {
    pub const PLACEHOLDER: &'static str = "Unknown";

    pub fn new(author: impl Into<String>) -> Self {
        Self(author.into())
    }
}
