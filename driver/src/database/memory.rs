use std::collections::HashMap;

use error_stack::Report;
use kernel::interface::query::CartQuery;
use kernel::interface::update::CartModifier;
use kernel::prelude::entity::{Cart, CartId};
use kernel::KernelError;
use tokio::sync::RwLock;
use tracing::debug;

/// Process-local cart storage. Carts vanish with the process.
#[derive(Default)]
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<CartId, Cart>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CartQuery for InMemoryCartStore {
    async fn find_by_id(&self, id: &CartId) -> error_stack::Result<Option<Cart>, KernelError> {
        Ok(self.carts.read().await.get(id).cloned())
    }
}

#[async_trait::async_trait]
impl CartModifier for InMemoryCartStore {
    async fn create(&self, cart: &Cart) -> error_stack::Result<(), KernelError> {
        let mut carts = self.carts.write().await;
        if carts.contains_key(cart.id()) {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Cart {:?} already exists", cart.id())));
        }
        debug!(cart = ?cart.id(), "cart created");
        carts.insert(*cart.id(), cart.clone());
        Ok(())
    }

    async fn modify<F, R>(&self, id: &CartId, f: F) -> error_stack::Result<R, KernelError>
    where
        F: FnOnce(&mut Cart) -> R + Send,
        R: Send,
    {
        let mut carts = self.carts.write().await;
        let cart = carts.get_mut(id).ok_or_else(|| {
            Report::new(KernelError::NotFound).attach_printable(format!("Cart {id:?} does not exist"))
        })?;
        Ok(f(cart))
    }

    async fn delete(&self, id: &CartId) -> error_stack::Result<(), KernelError> {
        match self.carts.write().await.remove(id) {
            Some(_) => {
                debug!(cart = ?id, "cart deleted");
                Ok(())
            }
            None => Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Cart {id:?} does not exist"))),
        }
    }
}
