use crate::controller::Intake;
use application::transfer::ResolveCoverDto;
use kernel::prelude::entity::CoverRequest;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ResolveCoverRequest {
    #[serde(default)]
    isbn: Option<String>,
    #[serde(default)]
    fallback: Option<String>,
}

pub struct CoverTransformer;

impl Intake<ResolveCoverRequest> for CoverTransformer {
    type To = CoverRequest;
    fn emit(&self, input: ResolveCoverRequest) -> Self::To {
        CoverRequest::from(ResolveCoverDto {
            isbn: input.isbn,
            fallback: input.fallback,
        })
    }
}
