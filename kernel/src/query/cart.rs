use crate::entity::{Cart, CartId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CartQuery: 'static + Sync + Send {
    async fn find_by_id(&self, id: &CartId) -> error_stack::Result<Option<Cart>, KernelError>;
}

pub trait DependOnCartQuery: 'static + Sync + Send {
    type CartQuery: CartQuery;
    fn cart_query(&self) -> &Self::CartQuery;
}
