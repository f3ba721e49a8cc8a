use crate::entity::{Category, Isbn, Volume};
use crate::KernelError;

/// Lookups against the external book-search service.
#[async_trait::async_trait]
pub trait VolumeQuery: 'static + Sync + Send {
    /// Volumes tagged with `category` as their subject, at most `max_results`.
    async fn search_subject(
        &self,
        category: &Category,
        max_results: u8,
    ) -> error_stack::Result<Vec<Volume>, KernelError>;

    /// Volumes matching `isbn`; the first one is the best match.
    async fn search_isbn(&self, isbn: &Isbn) -> error_stack::Result<Vec<Volume>, KernelError>;
}

pub trait DependOnVolumeQuery: 'static + Sync + Send {
    type VolumeQuery: VolumeQuery;
    fn volume_query(&self) -> &Self::VolumeQuery;
}

impl<T> DependOnVolumeQuery for T
where
    T: VolumeQuery,
{
    type VolumeQuery = T;
    fn volume_query(&self) -> &Self::VolumeQuery {
        self
    }
}
