use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use application::service::FetchCatalogService;
use kernel::prelude::entity::{BookFilter, BookRecord, CatalogView, CategorySelector};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::handler::AppModule;

/// Last aggregated catalog. `None` until the first aggregation settles.
///
/// Every refresh takes a generation when it starts; a result only replaces
/// the catalog if no newer refresh has already been applied.
#[derive(Default)]
pub struct CatalogState {
    issued: AtomicU64,
    current: RwLock<Snapshot>,
}

#[derive(Default)]
struct Snapshot {
    generation: u64,
    books: Option<Arc<Vec<BookRecord>>>,
}

impl CatalogState {
    pub async fn view(&self, filter: &BookFilter) -> CatalogView {
        let books = self.current.read().await.books.clone();
        CatalogView::of(books.as_deref().map(Vec::as_slice), filter)
    }

    pub fn begin_refresh(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns whether `books` was applied.
    pub async fn replace(&self, generation: u64, books: Vec<BookRecord>) -> bool {
        let mut current = self.current.write().await;
        if generation <= current.generation {
            debug!(
                stale = generation,
                current = current.generation,
                "discarding stale catalog refresh"
            );
            return false;
        }
        *current = Snapshot {
            generation,
            books: Some(Arc::new(books)),
        };
        true
    }
}

/// Aggregates every category in the background and swaps the result in.
pub fn spawn_refresh(module: AppModule) -> JoinHandle<()> {
    let generation = module.catalog().begin_refresh();
    tokio::spawn(async move {
        let mut rng = StdRng::from_entropy();
        let books = module
            .books()
            .fetch_catalog(&CategorySelector::every(), &mut rng)
            .await;
        module.catalog().replace(generation, books).await;
    })
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{
        BookAuthor, BookDescription, BookFilter, BookId, BookPrice, BookRating, BookRecord,
        BookTitle, CatalogView, Category, CategorySelector,
    };

    use super::CatalogState;

    fn book(id: &str, title: &str) -> BookRecord {
        BookRecord::new(
            BookId::new(id),
            BookTitle::new(title),
            BookAuthor::new("Andrea Hirata"),
            BookPrice::new(85_000u32),
            Category::Fiction,
            BookDescription::default(),
            BookRating::from_tenths(48),
            None,
            None,
        )
    }

    #[tokio::test]
    async fn loading_until_first_catalog() {
        let state = CatalogState::default();
        let filter = BookFilter::default();
        assert_eq!(state.view(&filter).await, CatalogView::Loading);

        state.replace(state.begin_refresh(), Vec::new()).await;
        assert_eq!(state.view(&filter).await, CatalogView::NoMatches);

        let book = book("1", "Laskar Pelangi");
        state.replace(state.begin_refresh(), vec![book.clone()]).await;
        assert_eq!(state.view(&filter).await, CatalogView::Books(vec![book]));

        let children = BookFilter::new("", CategorySelector::Only(Category::Children));
        assert_eq!(state.view(&children).await, CatalogView::NoMatches);
    }

    #[tokio::test]
    async fn older_refresh_settling_last_is_discarded() {
        let state = CatalogState::default();
        let filter = BookFilter::default();
        let older = state.begin_refresh();
        let newer = state.begin_refresh();

        assert!(state.replace(newer, vec![book("2", "Bumi")]).await);
        assert!(!state.replace(older, vec![book("1", "Laskar Pelangi")]).await);
        assert_eq!(
            state.view(&filter).await,
            CatalogView::Books(vec![book("2", "Bumi")])
        );
    }

    #[tokio::test]
    async fn older_refresh_settling_first_is_superseded() {
        let state = CatalogState::default();
        let filter = BookFilter::default();
        let older = state.begin_refresh();
        let newer = state.begin_refresh();

        assert!(state.replace(older, vec![book("1", "Laskar Pelangi")]).await);
        assert!(state.replace(newer, vec![book("2", "Bumi")]).await);
        assert_eq!(
            state.view(&filter).await,
            CatalogView::Books(vec![book("2", "Bumi")])
        );
    }
}
