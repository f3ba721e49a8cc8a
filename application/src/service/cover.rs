use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use kernel::interface::query::VolumeQuery;
use kernel::prelude::entity::{CoverRequest, CoverState, ImageUrl, Isbn, Volume};
use tokio::sync::{watch, RwLock};
use tracing::{debug, warn};

/// Definitive lookup outcomes keyed by ISBN, shared between resolvers.
/// Failed lookups are never stored, so a later attempt can still succeed.
/// Holds at most `capacity` entries; the oldest insertion is evicted first.
pub struct CoverCache {
    capacity: usize,
    entries: RwLock<CacheEntries>,
}

#[derive(Default)]
struct CacheEntries {
    covers: HashMap<Isbn, Option<ImageUrl>>,
    order: VecDeque<Isbn>,
}

impl CoverCache {
    pub const DEFAULT_CAPACITY: usize = 1024;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: RwLock::new(CacheEntries::default()),
        }
    }

    pub async fn get(&self, isbn: &Isbn) -> Option<Option<ImageUrl>> {
        self.entries.read().await.covers.get(isbn).cloned()
    }

    pub async fn insert(&self, isbn: Isbn, cover: Option<ImageUrl>) {
        let mut entries = self.entries.write().await;
        if let Some(stored) = entries.covers.get_mut(&isbn) {
            *stored = cover;
            return;
        }
        while entries.covers.len() >= self.capacity {
            let Some(oldest) = entries.order.pop_front() else {
                break;
            };
            entries.covers.remove(&oldest);
        }
        entries.order.push_back(isbn.clone());
        entries.covers.insert(isbn, cover);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.covers.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.covers.is_empty()
    }
}

impl Default for CoverCache {
    fn default() -> Self {
        Self::new()
    }
}

/// A lookup started by [`CoverResolver::begin`] that has not settled yet.
#[derive(Debug)]
pub struct PendingCover {
    generation: u64,
    isbn: Isbn,
    request: CoverRequest,
}

impl PendingCover {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

struct Current {
    generation: u64,
    request: Option<CoverRequest>,
}

/// Resolves a cover image for a changing identifier/fallback pair.
///
/// Each new request bumps a generation counter; a lookup only writes its
/// result if its generation is still current when it settles, so a slow
/// response for an old identifier never replaces the state of a newer one.
pub struct CoverResolver<Q: VolumeQuery> {
    query: Arc<Q>,
    cache: Option<Arc<CoverCache>>,
    current: Mutex<Current>,
    state: watch::Sender<CoverState>,
}

impl<Q: VolumeQuery> CoverResolver<Q> {
    pub fn new(query: Arc<Q>) -> Self {
        let (state, _) = watch::channel(CoverState::Idle);
        Self {
            query,
            cache: None,
            current: Mutex::new(Current {
                generation: 0,
                request: None,
            }),
            state,
        }
    }

    pub fn with_cache(mut self, cache: Arc<CoverCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<CoverState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> CoverState {
        self.state.borrow().clone()
    }

    /// Applies `request` synchronously. Without an identifier the final state is
    /// written immediately and nothing is returned; otherwise the state becomes
    /// `Loading` and the returned lookup must be passed to [`Self::settle`].
    /// Re-submitting the current request is a no-op.
    pub fn begin(&self, request: CoverRequest) -> Option<PendingCover> {
        let mut current = self.lock_current();
        if current.request.as_ref() == Some(&request) {
            return None;
        }
        current.generation += 1;
        current.request = Some(request.clone());

        match request.isbn().clone() {
            None => {
                self.state.send_replace(request.fallback_state());
                None
            }
            Some(isbn) => {
                self.state.send_replace(CoverState::Loading);
                Some(PendingCover {
                    generation: current.generation,
                    isbn,
                    request,
                })
            }
        }
    }

    /// Runs the lookup. Returns whether the outcome was published; a superseded
    /// lookup is discarded.
    pub async fn settle(&self, pending: PendingCover) -> bool {
        let outcome = match self.lookup(&pending.isbn).await {
            Some(url) => CoverState::Resolved(url),
            None => pending.request.fallback_state(),
        };

        let current = self.lock_current();
        if current.generation != pending.generation {
            debug!(
                isbn = ?pending.isbn,
                stale = pending.generation,
                current = current.generation,
                "discarding stale cover resolution"
            );
            return false;
        }
        self.state.send_replace(outcome);
        true
    }

    /// [`Self::begin`] followed by [`Self::settle`]; returns the state afterwards.
    pub async fn resolve(&self, request: CoverRequest) -> CoverState {
        if let Some(pending) = self.begin(request) {
            self.settle(pending).await;
        }
        self.state()
    }

    async fn lookup(&self, isbn: &Isbn) -> Option<ImageUrl> {
        if let Some(cache) = &self.cache {
            if let Some(cover) = cache.get(isbn).await {
                debug!(?isbn, "cover cache hit");
                return cover;
            }
        }
        match self.query.search_isbn(isbn).await {
            Ok(volumes) => {
                let cover = volumes.first().and_then(Volume::cover_url);
                if let Some(cache) = &self.cache {
                    cache.insert(isbn.clone(), cover.clone()).await;
                }
                cover
            }
            Err(report) => {
                warn!(?isbn, "cover lookup failed: {report:?}");
                None
            }
        }
    }

    fn lock_current(&self) -> MutexGuard<'_, Current> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
