use crate::handlers::{get_listing_handler, list_listings_handler, CatalogState};
use axum::{routing::get, Router};
use std::sync::Arc;

/// Creates a router for browsing listings.
pub fn routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/listings", get(list_listings_handler))
        .route("/listings/{listing_id}", get(get_listing_handler))
        .with_state(state)
}
