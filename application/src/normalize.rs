//! Turns raw lookup volumes into catalog records.
//!
//! The lookup service has no notion of price and only sometimes carries a rating,
//! so both are synthesized from the injected generator. Synthesized values are
//! display placeholders and carry no meaning beyond being plausible.

use std::ops::RangeInclusive;

use kernel::prelude::entity::{
    BookAuthor, BookDescription, BookId, BookPrice, BookRating, BookRecord, BookTitle, Category,
    Volume,
};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

pub const PRICE_RANGE: RangeInclusive<u32> = 50_000..=200_000;
pub const SYNTHETIC_RATING_TENTHS: RangeInclusive<u8> = 35..=48;

static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("html tag pattern must compile"));

pub fn strip_html(raw: &str) -> String {
    HTML_TAG.replace_all(raw, "").trim().to_string()
}

/// Returns `None` only for volumes without an id.
pub fn normalize_volume<R: Rng>(
    volume: Volume,
    category: Category,
    rng: &mut R,
) -> Option<BookRecord> {
    let id = volume.id.clone().filter(|id| !id.trim().is_empty())?;
    let isbn = volume.preferred_isbn();
    let image = volume.cover_url();

    let title = volume
        .title
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| BookTitle::PLACEHOLDER.to_string());
    let authors = volume
        .authors
        .into_iter()
        .filter(|author| !author.trim().is_empty())
        .collect::<Vec<_>>();
    let author = if authors.is_empty() {
        BookAuthor::PLACEHOLDER.to_string()
    } else {
        authors.join(", ")
    };
    let description = volume
        .description
        .map(|description| strip_html(&description))
        .filter(|description| !description.is_empty())
        .or(volume.subtitle)
        .unwrap_or_default();
    // A zero rating means the volume was never rated.
    let rating = match volume.average_rating.filter(|score| *score > 0.0) {
        Some(score) => BookRating::from_score(score),
        None => BookRating::from_tenths(rng.gen_range(SYNTHETIC_RATING_TENTHS)),
    };
    let price = rng.gen_range(PRICE_RANGE);

    Some(BookRecord::new(
        BookId::new(id),
        BookTitle::new(title),
        BookAuthor::new(author),
        BookPrice::new(price),
        category,
        BookDescription::new(description),
        rating,
        isbn,
        image,
    ))
}
