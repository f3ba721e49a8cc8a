use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{CoverTransformer, ResolveCoverRequest};
use crate::response::CoverPresenter;
use application::service::CoverResolver;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;
use error_stack::Report;
use kernel::KernelError;

pub trait CoverRouter {
    fn route_cover(self) -> Self;
}

impl CoverRouter for Router<AppModule> {
    fn route_cover(self) -> Self {
        self.route(
            "/covers",
            get(
                |State(module): State<AppModule>, Query(req): Query<ResolveCoverRequest>| async move {
                    Controller::new(CoverTransformer, CoverPresenter)
                        .intake(req)
                        .handle(|request| async move {
                            let resolver = CoverResolver::new(module.books().clone())
                                .with_cache(module.covers().clone());
                            Ok::<_, Report<KernelError>>(resolver.resolve(request).await)
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
