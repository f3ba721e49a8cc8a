use crate::controller::Intake;
use application::transfer::{AddToCartDto, GetCartDto, RemoveFromCartDto};
use kernel::prelude::entity::BookRecord;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct AddToCartRequest {
    book: BookRecord,
}

#[derive(Debug)]
pub struct GetCartRequest {
    id: Uuid,
}

impl GetCartRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct RemoveFromCartRequest {
    id: Uuid,
    index: usize,
}

impl RemoveFromCartRequest {
    pub fn new(id: Uuid, index: usize) -> Self {
        Self { id, index }
    }
}

pub struct CartTransformer;

impl Intake<GetCartRequest> for CartTransformer {
    type To = GetCartDto;
    fn emit(&self, input: GetCartRequest) -> Self::To {
        GetCartDto { id: input.id }
    }
}

impl Intake<(Uuid, AddToCartRequest)> for CartTransformer {
    type To = AddToCartDto;
    fn emit(&self, input: (Uuid, AddToCartRequest)) -> Self::To {
        let (id, input) = input;
        AddToCartDto {
            id,
            book: input.book,
        }
    }
}

impl Intake<RemoveFromCartRequest> for CartTransformer {
    type To = RemoveFromCartDto;
    fn emit(&self, input: RemoveFromCartRequest) -> Self::To {
        RemoveFromCartDto {
            id: input.id,
            index: input.index,
        }
    }
}
