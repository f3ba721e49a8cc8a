use kernel::prelude::entity::{CoverRequest, ImageUrl, Isbn};

pub struct ResolveCoverDto {
    pub isbn: Option<String>,
    pub fallback: Option<String>,
}

impl From<ResolveCoverDto> for CoverRequest {
    fn from(value: ResolveCoverDto) -> Self {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        CoverRequest::new(
            present(value.isbn).map(Isbn::new),
            present(value.fallback).map(ImageUrl::new),
        )
    }
}
