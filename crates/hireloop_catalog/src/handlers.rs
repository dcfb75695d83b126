// File: crates/hireloop_catalog/src/handlers.rs
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use hireloop_common::{handle_json_result, not_found, HireloopError, Listing, ListingProvider};
use serde::Deserialize;
use std::sync::Arc;

use crate::listings::parse_category;

#[derive(Clone)]
pub struct CatalogState {
    pub listings: Arc<dyn ListingProvider>,
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct ListingsQuery {
    /// talent, service or facility
    pub category: Option<String>,
}

/// Handler listing the marketplace, optionally filtered by category.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/listings",
    params(ListingsQuery),
    responses(
        (status = 200, description = "Listings in catalog order", body = Vec<Listing>),
        (status = 400, description = "Unknown category")
    ),
    tag = "Catalog"
))]
pub async fn list_listings_handler(
    State(state): State<Arc<CatalogState>>,
    Query(query): Query<ListingsQuery>,
) -> Result<Json<Vec<Listing>>, HireloopError> {
    let category = query
        .category
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .map(parse_category)
        .transpose()?;
    handle_json_result(state.listings.list_listings(category).await)
}

/// Handler returning one listing.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/listings/{listing_id}",
    params(("listing_id" = String, Path, description = "Listing id")),
    responses(
        (status = 200, description = "The listing", body = Listing),
        (status = 404, description = "Unknown listing")
    ),
    tag = "Catalog"
))]
pub async fn get_listing_handler(
    State(state): State<Arc<CatalogState>>,
    Path(listing_id): Path<String>,
) -> Result<Json<Listing>, HireloopError> {
    state
        .listings
        .get_listing(&listing_id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(format!("listing {}", listing_id)))
}
