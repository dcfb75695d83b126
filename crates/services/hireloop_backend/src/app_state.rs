// --- File: crates/services/hireloop_backend/src/app_state.rs ---
use std::sync::Arc;

use hireloop_calendar::CalendarState;
use hireloop_catalog::{CatalogState, InMemoryListingProvider, StaticSessionProvider};
use hireloop_common::{BookingSink, HireloopError, ListingProvider};
use hireloop_config::AppConfig;
use tracing::info;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<CatalogState>,
    pub calendar: Arc<CalendarState>,
}

impl AppState {
    /// Builds the in-memory catalog, the token sessions and the calendar
    /// from configuration. Booking requests go to `sink`.
    pub fn from_config(
        config: Arc<AppConfig>,
        sink: Arc<dyn BookingSink>,
    ) -> Result<Self, HireloopError> {
        let listings: Arc<dyn ListingProvider> =
            Arc::new(InMemoryListingProvider::from_config(&config.catalog)?);
        let sessions = StaticSessionProvider::from_config(&config.auth)?;
        info!("Auth configured for {} user(s)", sessions.user_count());

        let calendar = CalendarState::from_config(
            &config.calendar,
            listings.clone(),
            Arc::new(sessions),
            sink,
        )?;

        Ok(Self {
            config,
            catalog: Arc::new(CatalogState { listings }),
            calendar: Arc::new(calendar),
        })
    }
}
