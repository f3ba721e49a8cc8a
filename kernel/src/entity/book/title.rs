use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookTitle(String);

impl BookTitle {
    pub const PLACEHOLDER: &'static str = "Untitled";

    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }
}
