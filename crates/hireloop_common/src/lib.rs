// --- File: crates/hireloop_common/src/lib.rs ---

pub mod error; // Error handling
#[cfg(test)]
mod error_test;
pub mod http; // HTTP error mapping
pub mod logging; // Logging utilities
pub mod models; // Records shared with collaborators
pub mod services; // Collaborator abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, conflict, not_found, rejected, validation_error,
    Context, HireloopError, HttpStatusCode,
};

pub use http::{handle_json_result, IntoHttpResponse};

pub use logging::{init, init_from_config, init_with_level, log_result};

pub use models::{BookingRequest, Listing, ListingCategory, UserSession};
pub use services::{BookingSink, BoxFuture, ListingProvider, RecordingBookingSink, SessionProvider};
