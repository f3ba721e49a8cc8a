use kernel::prelude::entity::{BookFilter, CategorySelector};

pub struct FilterCatalogDto {
    pub query: Option<String>,
    pub category: Option<CategorySelector>,
}

impl From<FilterCatalogDto> for BookFilter {
    fn from(value: FilterCatalogDto) -> Self {
        BookFilter::new(
            value.query.unwrap_or_default(),
            value.category.unwrap_or_default(),
        )
    }
}
