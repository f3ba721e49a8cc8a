use crate::controller::Intake;
use application::transfer::FilterCatalogDto;
use kernel::prelude::entity::{BookFilter, CategorySelector};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GetBooksRequest {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    category: Option<CategorySelector>,
}

pub struct BookTransformer;

impl Intake<GetBooksRequest> for BookTransformer {
    type To = BookFilter;
    fn emit(&self, input: GetBooksRequest) -> Self::To {
        BookFilter::from(FilterCatalogDto {
            query: input.q,
            category: input.category,
        })
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{BookFilter, Category, CategorySelector};

    use super::{BookTransformer, GetBooksRequest};
    use crate::controller::Intake;

    #[test]
    fn missing_parameters_mean_unfiltered() {
        let req: GetBooksRequest = serde_json::from_str("{}").unwrap();
        let filter = BookTransformer.emit(req);
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn query_and_category_are_applied() {
        let req: GetBooksRequest =
            serde_json::from_str(r#"{"q": "  Laskar ", "category": "fiction"}"#).unwrap();
        let filter = BookTransformer.emit(req);
        assert_eq!(
            filter,
            BookFilter::new("laskar", CategorySelector::Only(Category::Fiction))
        );
    }
}
