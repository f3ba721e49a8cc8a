use std::fmt::{Display, Formatter};
use std::str::FromStr;

use error_stack::Report;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::KernelError;

const ALL: &str = "all";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fiction,
    Nonfiction,
    Children,
    Education,
    Business,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Fiction,
        Category::Nonfiction,
        Category::Children,
        Category::Education,
        Category::Business,
    ];

    /// Identifier used both on the wire and as the lookup subject.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fiction => "fiction",
            Category::Nonfiction => "nonfiction",
            Category::Children => "children",
            Category::Education => "education",
            Category::Business => "business",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiksi",
            Category::Nonfiction => "Non-Fiksi",
            Category::Children => "Buku Anak",
            Category::Education => "Pendidikan",
            Category::Business => "Bisnis & Ekonomi",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Report<KernelError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| {
                Report::new(KernelError::InvalidInput)
                    .attach_printable(format!("Unknown category: {s}"))
            })
    }
}

/// A category id as supplied by callers, including the `all` sentinel.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum CategorySelector {
    #[default]
    All,
    Only(Category),
}

impl CategorySelector {
    /// The sentinel followed by every concrete category, in menu order.
    pub fn every() -> Vec<CategorySelector> {
        std::iter::once(CategorySelector::All)
            .chain(Category::ALL.into_iter().map(CategorySelector::Only))
            .collect()
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            CategorySelector::All => None,
            CategorySelector::Only(category) => Some(*category),
        }
    }

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Only(selected) => selected == category,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategorySelector::All => "Semua Kategori",
            CategorySelector::Only(category) => category.display_name(),
        }
    }
}

impl From<Category> for CategorySelector {
    fn from(value: Category) -> Self {
        Self::Only(value)
    }
}

impl Display for CategorySelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CategorySelector::All => f.write_str(ALL),
            CategorySelector::Only(category) => Display::fmt(category, f),
        }
    }
}

impl FromStr for CategorySelector {
    type Err = Report<KernelError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ALL => Ok(CategorySelector::All),
            other => other.parse().map(CategorySelector::Only),
        }
    }
}

impl Serialize for CategorySelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CategorySelector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|_| D::Error::custom(format!("unknown category: {raw}")))
    }
}

#[cfg(test)]
mod test {
    use super::{Category, CategorySelector};

    #[test]
    fn parses_sentinel_and_categories() {
        assert_eq!("all".parse::<CategorySelector>().ok(), Some(CategorySelector::All));
        assert_eq!(
            "children".parse::<CategorySelector>().ok(),
            Some(CategorySelector::Only(Category::Children))
        );
        assert!("poetry".parse::<CategorySelector>().is_err());
    }

    #[test]
    fn every_starts_with_sentinel() {
        let every = CategorySelector::every();
        assert_eq!(every.len(), 6);
        assert_eq!(every[0], CategorySelector::All);
        assert_eq!(every[1], CategorySelector::Only(Category::Fiction));
    }

    #[test]
    fn selector_serde_uses_ids() {
        let json = serde_json::to_string(&CategorySelector::Only(Category::Business)).unwrap();
        assert_eq!(json, "\"business\"");
        let parsed: CategorySelector = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, CategorySelector::All);
    }
}
