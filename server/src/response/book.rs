use crate::controller::Exhaust;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::{CatalogView, CategorySelector};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    value: CategorySelector,
    label: &'static str,
}

impl From<CategorySelector> for CategoryResponse {
    fn from(value: CategorySelector) -> Self {
        Self {
            label: value.display_name(),
            value,
        }
    }
}

/// Returned when a background aggregation was queued.
#[derive(Debug)]
pub struct RefreshAccepted;

impl IntoResponse for RefreshAccepted {
    fn into_response(self) -> Response {
        StatusCode::ACCEPTED.into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<CatalogView> for BookPresenter {
    type To = axum::Json<CatalogView>;
    fn emit(&self, input: CatalogView) -> Self::To {
        axum::Json(input)
    }
}

impl Exhaust<Vec<CategorySelector>> for BookPresenter {
    type To = axum::Json<Vec<CategoryResponse>>;
    fn emit(&self, input: Vec<CategorySelector>) -> Self::To {
        axum::Json(input.into_iter().map(CategoryResponse::from).collect())
    }
}

impl Exhaust<()> for BookPresenter {
    type To = RefreshAccepted;
    fn emit(&self, _: ()) -> Self::To {
        RefreshAccepted
    }
}
