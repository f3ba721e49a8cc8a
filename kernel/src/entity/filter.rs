use serde::Serialize;
use vodca::References;

use crate::entity::{BookRecord, CategorySelector};

/// Free-text query over title or author, combined with a category selection.
#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct BookFilter {
    query: String,
    category: CategorySelector,
}

impl BookFilter {
    pub fn new(query: impl Into<String>, category: CategorySelector) -> Self {
        Self {
            query: query.into().trim().to_lowercase(),
            category,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.category == CategorySelector::All
    }

    pub fn matches(&self, book: &BookRecord) -> bool {
        let text = self.query.as_str();
        let matches_text = text.is_empty()
            || AsRef::<String>::as_ref(book.title())
                .to_lowercase()
                .contains(text)
            || AsRef::<String>::as_ref(book.author())
                .to_lowercase()
                .contains(text);
        matches_text && self.category.matches(book.category())
    }

    pub fn apply(&self, books: &[BookRecord]) -> Vec<BookRecord> {
        books
            .iter()
            .filter(|book| self.matches(book))
            .cloned()
            .collect()
    }
}

/// What a catalog section shows. `NoMatches` is distinct from `Loading`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "state", content = "books", rename_all = "snake_case")]
pub enum CatalogView {
    Loading,
    NoMatches,
    Books(Vec<BookRecord>),
}

impl CatalogView {
    pub fn of(catalog: Option<&[BookRecord]>, filter: &BookFilter) -> Self {
        match catalog {
            None => CatalogView::Loading,
            Some(books) => {
                let books = filter.apply(books);
                if books.is_empty() {
                    CatalogView::NoMatches
                } else {
                    CatalogView::Books(books)
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{BookFilter, CatalogView};
    use crate::entity::{
        BookAuthor, BookDescription, BookId, BookPrice, BookRating, BookRecord, BookTitle,
        Category, CategorySelector,
    };

    fn book(id: &str, title: &str, author: &str, category: Category) -> BookRecord {
        BookRecord::new(
            BookId::new(id),
            BookTitle::new(title),
            BookAuthor::new(author),
            BookPrice::new(100_000u32),
            category,
            BookDescription::default(),
            BookRating::from_tenths(45),
            None,
            None,
        )
    }

    fn catalog() -> Vec<BookRecord> {
        vec![
            book("1", "Laskar Pelangi", "Andrea Hirata", Category::Fiction),
            book("2", "Atomic Habits", "James Clear", Category::Nonfiction),
            book("3", "Bumi Manusia", "Pramoedya Ananta Toer", Category::Fiction),
        ]
    }

    #[test]
    fn matches_title_or_author_case_insensitively() {
        let books = catalog();
        let by_title = BookFilter::new("LASKAR", CategorySelector::All).apply(&books);
        assert_eq!(by_title.len(), 1);
        let by_author = BookFilter::new("clear", CategorySelector::All).apply(&books);
        assert_eq!(by_author[0].id(), &BookId::new("2"));
    }

    #[test]
    fn combines_query_and_category() {
        let books = catalog();
        let filter = BookFilter::new("a", CategorySelector::Only(Category::Fiction));
        let ids = filter
            .apply(&books)
            .into_iter()
            .map(|book| book.id().clone())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![BookId::new("1"), BookId::new("3")]);
    }

    #[test]
    fn view_distinguishes_loading_and_empty() {
        let books = catalog();
        let filter = BookFilter::new("nothing like this", CategorySelector::All);
        assert_eq!(CatalogView::of(None, &filter), CatalogView::Loading);
        assert_eq!(CatalogView::of(Some(&books), &filter), CatalogView::NoMatches);
        assert!(matches!(
            CatalogView::of(Some(&books), &BookFilter::default()),
            CatalogView::Books(all) if all.len() == 3
        ));
    }
}
