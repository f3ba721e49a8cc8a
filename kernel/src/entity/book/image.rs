use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
#[serde(from = "String")]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Rewrites a leading `http:` scheme to `https:`.
    pub fn secure(url: impl Into<String>) -> Self {
        let url = url.into();
        match url.strip_prefix("http:") {
            Some(rest) => Self(format!("https:{rest}")),
            None => Self(url),
        }
    }
}

impl From<String> for ImageUrl {
    fn from(value: String) -> Self {
        Self::secure(value)
    }
}
