use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
#[serde(from = "String")]
pub struct BookDescription(String);

impl BookDescription {
    /// Upper bound in characters, not bytes.
    pub const MAX_CHARS: usize = 300;

    pub fn new(description: impl Into<String>) -> Self {
        let description = description.into();
        match description.char_indices().nth(Self::MAX_CHARS) {
            Some((cut, _)) => Self(description[..cut].to_string()),
            None => Self(description),
        }
    }
}

impl From<String> for BookDescription {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod test {
    use super::BookDescription;

    #[test]
    fn caps_length_on_char_boundary() {
        let long = "é".repeat(BookDescription::MAX_CHARS + 20);
        let description = BookDescription::new(long);
        assert_eq!(
            description.as_ref().chars().count(),
            BookDescription::MAX_CHARS
        );

        let short = BookDescription::new("short");
        assert_eq!(short.as_ref(), "short");
    }

    #[test]
    fn deserialized_description_is_capped() {
        let raw = serde_json::to_string(&"a".repeat(BookDescription::MAX_CHARS * 2)).unwrap();
        let description: BookDescription = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            description.as_ref().chars().count(),
            BookDescription::MAX_CHARS
        );
    }
}
