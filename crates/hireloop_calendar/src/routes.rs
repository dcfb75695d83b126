// --- File: crates/hireloop_calendar/src/routes.rs ---

use crate::handlers::{
    get_availability_handler, get_calendar_handler, get_slots_handler, request_booking_handler,
    reset_session_handler, CalendarState,
};
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

/// Creates a router containing all routes of the booking calendar.
pub fn routes(state: Arc<CalendarState>) -> Router {
    Router::new()
        .route(
            "/listings/{listing_id}/availability",
            get(get_availability_handler),
        )
        .route("/listings/{listing_id}/calendar", get(get_calendar_handler))
        .route("/listings/{listing_id}/slots", get(get_slots_handler))
        .route("/listings/{listing_id}/session", delete(reset_session_handler))
        .route(
            "/listings/{listing_id}/bookings",
            post(request_booking_handler),
        )
        .with_state(state)
}
