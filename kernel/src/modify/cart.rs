use crate::entity::{Cart, CartId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CartModifier: 'static + Sync + Send {
    async fn create(&self, cart: &Cart) -> error_stack::Result<(), KernelError>;
    /// Loads, mutates and stores the cart as one step; concurrent calls on the
    /// same cart are applied one after another.
    async fn modify<F, R>(&self, id: &CartId, f: F) -> error_stack::Result<R, KernelError>
    where
        F: FnOnce(&mut Cart) -> R + Send,
        R: Send;
    async fn delete(&self, id: &CartId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCartModifier: 'static + Sync + Send {
    type CartModifier: CartModifier;
    fn cart_modifier(&self) -> &Self::CartModifier;
}
