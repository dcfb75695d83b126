//! Service abstractions for the collaborators around the booking calendar.
//!
//! Listings, sessions and the booking event consumer are external to the
//! calendar core. These traits let the backend inject in-memory
//! implementations today and real ones later, and let tests substitute fakes.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use crate::error::HireloopError;
use crate::models::{BookingRequest, Listing, ListingCategory, UserSession};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Source of marketplace listings.
pub trait ListingProvider: Send + Sync {
    /// Fetch one listing; `Ok(None)` when the id is unknown.
    fn get_listing(&self, listing_id: &str) -> BoxFuture<'_, Option<Listing>, HireloopError>;

    /// List listings, optionally restricted to one category.
    fn list_listings(
        &self,
        category: Option<ListingCategory>,
    ) -> BoxFuture<'_, Vec<Listing>, HireloopError>;
}

/// Identity collaborator resolving a bearer token into a session.
pub trait SessionProvider: Send + Sync {
    /// Resolve the session for an optional bearer token. Unknown or missing
    /// tokens yield an anonymous session, not an error.
    fn resolve_session(
        &self,
        bearer_token: Option<&str>,
    ) -> BoxFuture<'_, UserSession, HireloopError>;
}

/// Consumer of booking-request events (the hosting application).
pub trait BookingSink: Send + Sync {
    fn emit(&self, request: BookingRequest);
}

impl<S: BookingSink + ?Sized> BookingSink for Arc<S> {
    fn emit(&self, request: BookingRequest) {
        (**self).emit(request)
    }
}

/// Keeps every emitted request in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingBookingSink {
    requests: Mutex<Vec<BookingRequest>>,
}

impl RecordingBookingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the requests emitted so far.
    pub fn requests(&self) -> Vec<BookingRequest> {
        match self.requests.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl BookingSink for RecordingBookingSink {
    fn emit(&self, request: BookingRequest) {
        match self.requests.lock() {
            Ok(mut guard) => guard.push(request),
            Err(poisoned) => poisoned.into_inner().push(request),
        }
    }
}
