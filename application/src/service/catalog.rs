use futures::future::join_all;
use kernel::interface::query::{DependOnVolumeQuery, VolumeQuery};
use kernel::prelude::entity::{BookRecord, CategorySelector};
use rand::Rng;
use tracing::{info, warn};

use crate::normalize::normalize_volume;

/// Results requested per category; the lookup service caps a page at 40.
pub const CATALOG_PAGE_SIZE: u8 = 40;

#[async_trait::async_trait]
pub trait FetchCatalogService: 'static + Sync + Send + DependOnVolumeQuery {
    /// One lookup per concrete category, run concurrently and joined.
    /// A failed lookup contributes nothing; the call itself never fails.
    /// Output keeps the order of `categories`, then the order of each response.
    async fn fetch_catalog<R: Rng + Send>(
        &self,
        categories: &[CategorySelector],
        rng: &mut R,
    ) -> Vec<BookRecord> {
        let lookups = categories
            .iter()
            .filter_map(CategorySelector::category)
            .map(|category| async move {
                let volumes = match self
                    .volume_query()
                    .search_subject(&category, CATALOG_PAGE_SIZE)
                    .await
                {
                    Ok(volumes) => volumes,
                    Err(report) => {
                        warn!(%category, "catalog lookup failed: {report:?}");
                        Vec::new()
                    }
                };
                (category, volumes)
            });
        let results = join_all(lookups).await;

        let mut books = Vec::new();
        for (category, volumes) in results {
            for volume in volumes {
                if let Some(book) = normalize_volume(volume, category, rng) {
                    books.push(book);
                }
            }
        }
        info!(count = books.len(), "catalog aggregated");
        books
    }
}

impl<T> FetchCatalogService for T where T: DependOnVolumeQuery {}
