// File: crates/hireloop_catalog/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use hireloop_common::{Listing, ListingCategory};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::list_listings_handler,
        crate::handlers::get_listing_handler,
    ),
    components(schemas(Listing, ListingCategory)),
    tags(
        (name = "Catalog", description = "Marketplace listings: talents, services and facilities")
    )
)]
pub struct CatalogApiDoc;
