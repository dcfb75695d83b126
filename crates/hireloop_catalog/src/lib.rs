// --- File: crates/hireloop_catalog/src/lib.rs ---
pub mod doc;
pub mod error;
pub mod handlers;
pub mod listings;
pub mod routes;
pub mod sessions;

pub use error::CatalogError;
pub use handlers::CatalogState;
pub use listings::{mock_listings, parse_category, InMemoryListingProvider};
pub use routes::routes;
pub use sessions::StaticSessionProvider;
