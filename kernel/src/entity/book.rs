mod author;
mod description;
mod id;
mod image;
mod isbn;
mod price;
mod rating;
mod title;

pub use self::{
    author::*, description::*, id::*, image::*, isbn::*, price::*, rating::*, title::*,
};
use crate::entity::Category;
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

/// A normalized catalog entry. Immutable once built; carts hold their own copies.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct BookRecord {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    price: BookPrice,
    category: Category,
    description: BookDescription,
    rating: BookRating,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    isbn: Option<Isbn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<ImageUrl>,
}

impl BookRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        price: BookPrice,
        category: Category,
        description: BookDescription,
        rating: BookRating,
        isbn: Option<Isbn>,
        image: Option<ImageUrl>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            price,
            category,
            description,
            rating,
            isbn,
            image,
        }
    }
}
