use crate::controller::Exhaust;
use application::transfer::{CartDto, CheckoutDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::{BookRecord, BookTitle};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct CartResponse {
    id: Uuid,
    entries: Vec<BookRecord>,
    total: u64,
}

impl From<CartDto> for CartResponse {
    fn from(value: CartDto) -> Self {
        Self {
            id: value.id,
            entries: value.entries,
            total: value.total,
        }
    }
}

impl IntoResponse for CartResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedCartResponse(CartResponse);

impl IntoResponse for CreatedCartResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckoutResponse {
    Rejected,
    Completed { titles: Vec<BookTitle>, total: u64 },
}

impl IntoResponse for CheckoutResponse {
    fn into_response(self) -> Response {
        let status = match self {
            CheckoutResponse::Rejected => StatusCode::UNPROCESSABLE_ENTITY,
            CheckoutResponse::Completed { .. } => StatusCode::OK,
        };
        (status, axum::Json(self)).into_response()
    }
}

pub struct CartPresenter;

impl Exhaust<CartDto> for CartPresenter {
    type To = CartResponse;
    fn emit(&self, input: CartDto) -> Self::To {
        CartResponse::from(input)
    }
}

impl Exhaust<Option<CartDto>> for CartPresenter {
    type To = Option<CartResponse>;
    fn emit(&self, input: Option<CartDto>) -> Self::To {
        input.map(CartResponse::from)
    }
}

impl Exhaust<CheckoutDto> for CartPresenter {
    type To = CheckoutResponse;
    fn emit(&self, input: CheckoutDto) -> Self::To {
        match input {
            CheckoutDto::Rejected => CheckoutResponse::Rejected,
            CheckoutDto::Completed { titles, total } => {
                CheckoutResponse::Completed { titles, total }
            }
        }
    }
}

impl Exhaust<()> for CartPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

impl CartResponse {
    pub fn created(self) -> CreatedCartResponse {
        CreatedCartResponse(self)
    }
}
