//! Listing quality validation
//!
//! Collects every problem as a human-readable message instead of failing
//! on the first one. Assembly never calls this; callers decide whether the
//! collected errors block publication.

use shared::models::ProductListing;

use crate::listing::fields::fields_for;

pub const MIN_HIGHLIGHTS: usize = 3;
pub const MAX_HIGHLIGHTS: usize = 5;
pub const MIN_HIGHLIGHT_WORDS: usize = 6;
pub const MAX_HIGHLIGHT_WORDS: usize = 12;

/// Validate an assembled listing, returning all problems found.
pub fn validate_listing(listing: &ProductListing) -> Vec<String> {
    let mut errors = Vec::new();

    if listing.title.trim().is_empty() {
        errors.push("Title is required".to_string());
    }

    let count = listing.highlights.len();
    if !(MIN_HIGHLIGHTS..=MAX_HIGHLIGHTS).contains(&count) {
        errors.push(format!(
            "Highlights should contain between {MIN_HIGHLIGHTS} and {MAX_HIGHLIGHTS} bullets."
        ));
    }

    for (index, highlight) in listing.highlights.iter().enumerate() {
        let words = highlight.split_whitespace().count();
        if !(MIN_HIGHLIGHT_WORDS..=MAX_HIGHLIGHT_WORDS).contains(&words) {
            errors.push(format!(
                "Highlight {} should be {MIN_HIGHLIGHT_WORDS}\u{2013}{MAX_HIGHLIGHT_WORDS} words.",
                index + 1
            ));
        }
    }

    for field in fields_for(listing.product_type) {
        if field.required
            && listing
                .attributes
                .get(&field.key)
                .is_none_or(|v| v.trim().is_empty())
        {
            errors.push(format!("{} is required", field.label));
        }
    }

    if listing.price_table.is_empty() {
        errors.push("Price table is empty; check the selected price segment.".to_string());
    }

    errors
}
