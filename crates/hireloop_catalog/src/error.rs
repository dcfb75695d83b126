// --- File: crates/hireloop_catalog/src/error.rs ---
use hireloop_common::{config_error, conflict, validation_error, HireloopError, HttpStatusCode};
use thiserror::Error;

/// Catalog-specific error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Category filter is not one of talent/service/facility
    #[error("Unknown listing category '{0}'")]
    UnknownCategory(String),

    /// Two listings share the same id
    #[error("Listing id '{0}' is used more than once")]
    DuplicateListing(String),

    /// A listing record cannot be served
    #[error("Listing '{id}' is invalid: {reason}")]
    InvalidListing { id: String, reason: String },

    /// Two configured users share the same token
    #[error("Auth token of user '{0}' is already assigned to another user")]
    DuplicateToken(String),
}

impl From<CatalogError> for HireloopError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownCategory(_) => validation_error(err),
            CatalogError::DuplicateListing(_) => conflict(err),
            CatalogError::InvalidListing { .. } | CatalogError::DuplicateToken(_) => {
                config_error(err)
            }
        }
    }
}

impl HttpStatusCode for CatalogError {
    fn status_code(&self) -> u16 {
        match self {
            CatalogError::UnknownCategory(_) => 400,
            CatalogError::DuplicateListing(_) => 409,
            CatalogError::InvalidListing { .. } => 500,
            CatalogError::DuplicateToken(_) => 500,
        }
    }
}
