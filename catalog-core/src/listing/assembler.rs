//! Listing assembly
//!
//! Turns raw listing input into a [`ProductListing`] with a frozen price
//! table. Pricing resolves through [`PriceResolver`] unless the input names
//! the custom segment, which carries its own table past the resolver.

use shared::models::{ProductListing, ProductListingInput, CUSTOM_SEGMENT_ID};
use shared::util::now_millis;

use crate::pricing::{PriceContext, PriceResolver};
use crate::utils::slug::slugify;

/// Assembles listings against a price resolver.
#[derive(Debug, Clone)]
pub struct ListingAssembler {
    resolver: PriceResolver,
}

impl ListingAssembler {
    pub fn new(resolver: PriceResolver) -> Self {
        Self { resolver }
    }

    /// Assemble a listing from raw input.
    ///
    /// The resulting `price_table` is a point-in-time copy; later segment
    /// edits do not reach listings assembled before them. Assembly never
    /// fails on quality problems, run [`super::validate_listing`] on the
    /// result to collect those.
    pub fn assemble(&self, input: ProductListingInput) -> ProductListing {
        let price_table = if input.price_segment_id == CUSTOM_SEGMENT_ID {
            input.custom_price_table.clone().unwrap_or_default()
        } else {
            let ctx = PriceContext {
                product_type: Some(input.product_type),
                category_id: input.primary_category_id.clone(),
            };
            self.resolver.resolve(&input.price_segment_id, &ctx)
        };

        let slug = match input.slug {
            Some(slug) if !slug.trim().is_empty() => slug,
            _ => slugify(&input.title),
        };

        tracing::info!(
            title = %input.title,
            segment = %input.price_segment_id,
            entries = price_table.len(),
            "listing assembled"
        );

        ProductListing {
            title: input.title,
            description: input.description,
            highlights: input.highlights,
            product_type: input.product_type,
            attributes: input.attributes,
            sku: input.sku,
            slug,
            primary_image: input.primary_image,
            secondary_images: input.secondary_images,
            primary_category_id: input.primary_category_id,
            category_ids: input.category_ids,
            price_segment_id: input.price_segment_id,
            price_table,
            created_at: now_millis(),
        }
    }
}
