use crate::catalog;
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{BookTransformer, GetBooksRequest};
use crate::response::BookPresenter;
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::Router;
use error_stack::Report;
use kernel::prelude::entity::CategorySelector;
use kernel::KernelError;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(
                |State(module): State<AppModule>, Query(req): Query<GetBooksRequest>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(req)
                        .handle(|filter| async move {
                            Ok::<_, Report<KernelError>>(module.catalog().view(&filter).await)
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/refresh",
            post(|State(module): State<AppModule>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async move {
                        catalog::spawn_refresh(module);
                        Ok::<_, Report<KernelError>>(())
                    })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/categories",
            get(|| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async { Ok::<_, Report<KernelError>>(CategorySelector::every()) })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
