use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{AddToCartRequest, CartTransformer, GetCartRequest, RemoveFromCartRequest};
use crate::response::{CartPresenter, CartResponse};
use application::service::CartService;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use uuid::Uuid;

pub trait CartRouter {
    fn route_cart(self) -> Self;
}

impl CartRouter for Router<AppModule> {
    fn route_cart(self) -> Self {
        self.route(
            "/carts",
            post(|State(module): State<AppModule>| async move {
                Controller::new((), CartPresenter)
                    .bypass(|| module.handler().create_cart())
                    .await
                    .map(CartResponse::created)
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/carts/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(CartTransformer, CartPresenter)
                        .intake(GetCartRequest::new(id))
                        .handle(|dto| module.handler().get_cart(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(CartResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(CartTransformer, CartPresenter)
                        .intake(GetCartRequest::new(id))
                        .handle(|dto| module.handler().delete_cart(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/carts/:id/items",
            post(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<AddToCartRequest>| async move {
                    Controller::new(CartTransformer, CartPresenter)
                        .intake((id, req))
                        .handle(|dto| module.handler().add_to_cart(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(CartTransformer, CartPresenter)
                        .intake(GetCartRequest::new(id))
                        .handle(|dto| module.handler().clear_cart(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/carts/:id/items/:index",
            delete(
                |State(module): State<AppModule>, Path((id, index)): Path<(Uuid, usize)>| async move {
                    Controller::new(CartTransformer, CartPresenter)
                        .intake(RemoveFromCartRequest::new(id, index))
                        .handle(|dto| module.handler().remove_from_cart(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/carts/:id/checkout",
            post(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(CartTransformer, CartPresenter)
                        .intake(GetCartRequest::new(id))
                        .handle(|dto| module.handler().checkout(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
