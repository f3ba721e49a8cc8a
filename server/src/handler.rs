use application::service::CoverCache;
use driver::database::InMemoryCartStore;
use driver::lookup::GoogleBooksClient;
use driver::notify::BroadcastNotifier;
use kernel::interface::notify::DependOnNotificationPublisher;
use kernel::interface::query::DependOnCartQuery;
use kernel::interface::update::DependOnCartModifier;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

use crate::catalog::CatalogState;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init()?)))
    }

    pub fn handler(&self) -> &Handler {
        &self.0
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    books: Arc<GoogleBooksClient>,
    covers: Arc<CoverCache>,
    catalog: CatalogState,
    carts: InMemoryCartStore,
    notifier: BroadcastNotifier,
}

impl Handler {
    pub fn init() -> error_stack::Result<Self, KernelError> {
        let books = Arc::new(GoogleBooksClient::from_env()?);

        Ok(Self {
            books,
            covers: Arc::new(CoverCache::new()),
            catalog: CatalogState::default(),
            carts: InMemoryCartStore::new(),
            notifier: BroadcastNotifier::default(),
        })
    }
}

impl DependOnCartQuery for Handler {
    type CartQuery = InMemoryCartStore;
    fn cart_query(&self) -> &Self::CartQuery {
        &self.carts
    }
}

impl DependOnCartModifier for Handler {
    type CartModifier = InMemoryCartStore;
    fn cart_modifier(&self) -> &Self::CartModifier {
        &self.carts
    }
}

impl DependOnNotificationPublisher for Handler {
    type NotificationPublisher = BroadcastNotifier;
    fn notification_publisher(&self) -> &Self::NotificationPublisher {
        &self.notifier
    }
}
