use crate::entity::{ImageUrl, Isbn};

const ISBN_13: &str = "ISBN_13";
const ISBN_10: &str = "ISBN_10";

/// A raw volume as returned by the external lookup service.
/// Every field may be missing; normalization decides the defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Volume {
    pub id: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub authors: Vec<String>,
    pub description: Option<String>,
    pub average_rating: Option<f64>,
    pub thumbnail: Option<String>,
    pub small_thumbnail: Option<String>,
    pub identifiers: Vec<IndustryIdentifier>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct IndustryIdentifier {
    pub kind: String,
    pub identifier: String,
}

impl IndustryIdentifier {
    pub fn new(kind: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            identifier: identifier.into(),
        }
    }
}

impl Volume {
    /// ISBN-13 when present, ISBN-10 otherwise.
    pub fn preferred_isbn(&self) -> Option<Isbn> {
        let find = |kind: &str| {
            self.identifiers
                .iter()
                .find(|id| id.kind == kind && !id.identifier.is_empty())
                .map(|id| Isbn::new(id.identifier.clone()))
        };
        find(ISBN_13).or_else(|| find(ISBN_10))
    }

    /// Display-ready thumbnail, preferring the larger image, always on https.
    pub fn cover_url(&self) -> Option<ImageUrl> {
        self.thumbnail
            .as_deref()
            .or(self.small_thumbnail.as_deref())
            .filter(|url| !url.is_empty())
            .map(ImageUrl::secure)
    }
}
