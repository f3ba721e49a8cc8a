use crate::controller::Exhaust;
use kernel::prelude::entity::CoverState;

pub struct CoverPresenter;

impl Exhaust<CoverState> for CoverPresenter {
    type To = axum::Json<CoverState>;
    fn emit(&self, input: CoverState) -> Self::To {
        axum::Json(input)
    }
}
