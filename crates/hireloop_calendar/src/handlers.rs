// File: crates/hireloop_calendar/src/handlers.rs
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::Json,
};
use chrono::Datelike;
use hireloop_common::{
    not_found, BookingRequest, BookingSink, HireloopError, Listing, ListingProvider,
    SessionProvider,
};
use hireloop_config::CalendarConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::clock::{Clock, ZonedClock};
use crate::gate::BookingGate;
use crate::logic::{
    default_time_slots, parse_day, AvailabilityMap, AvailabilityStatus, CalendarError,
    CalendarPolicy, CalendarView, Day, MonthGrid, TimeSlot,
};
use crate::provider::{AvailabilityProvider, SimulatedAvailabilityProvider};
use crate::selection::Selection;
use crate::session::AvailabilitySessions;

// Shared state needed by the calendar handlers
#[derive(Clone)]
pub struct CalendarState {
    pub listings: Arc<dyn ListingProvider>,
    pub sessions: Arc<dyn SessionProvider>,
    pub availability: Arc<AvailabilitySessions>,
    pub clock: Arc<dyn Clock>,
    pub fallback_slots: Arc<Vec<TimeSlot>>,
    pub gate: Arc<BookingGate<Arc<dyn BookingSink>>>,
}

impl CalendarState {
    /// Wires the calendar from configuration with the simulated availability provider.
    pub fn from_config(
        config: &CalendarConfig,
        listings: Arc<dyn ListingProvider>,
        sessions: Arc<dyn SessionProvider>,
        sink: Arc<dyn BookingSink>,
    ) -> Result<Self, CalendarError> {
        let provider = SimulatedAvailabilityProvider::new(
            &config.weights,
            config.horizon_months,
            config.seed,
        )?;
        let clock = ZonedClock::from_name(config.time_zone.as_deref())?;
        let fallback_slots = if config.default_slots.is_empty() {
            default_time_slots()
        } else {
            config.default_slots.clone()
        };
        Ok(Self::new(
            CalendarPolicy::from_config(config)?,
            Arc::new(provider),
            Arc::new(clock),
            fallback_slots,
            listings,
            sessions,
            sink,
        ))
    }

    pub fn new(
        policy: CalendarPolicy,
        provider: Arc<dyn AvailabilityProvider>,
        clock: Arc<dyn Clock>,
        fallback_slots: Vec<TimeSlot>,
        listings: Arc<dyn ListingProvider>,
        sessions: Arc<dyn SessionProvider>,
        sink: Arc<dyn BookingSink>,
    ) -> Self {
        Self {
            listings,
            sessions,
            availability: Arc::new(AvailabilitySessions::new(provider, Arc::new(policy))),
            clock,
            fallback_slots: Arc::new(fallback_slots),
            gate: Arc::new(BookingGate::new(sink)),
        }
    }

    async fn listing(&self, listing_id: &str) -> Result<Listing, HireloopError> {
        self.listings
            .get_listing(listing_id)
            .await?
            .ok_or_else(|| not_found(format!("listing {}", listing_id)))
    }
}

// --- Request / Response types ---

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailabilityResponse {
    pub listing_id: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = Date))]
    pub today: Day,
    pub availability: AvailabilityMap,
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct MonthQuery {
    /// Defaults to the current year
    pub year: Option<i32>,
    /// 1-12, defaults to the current month
    pub month: Option<u32>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct SlotsQuery {
    /// Day in YYYY-MM-DD format
    pub date: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotsResponse {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = Date))]
    pub date: Day,
    pub status: Option<AvailabilityStatus>,
    pub disabled: bool,
    pub slots: Vec<TimeSlot>,
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingSubmission {
    #[cfg_attr(feature = "openapi", schema(example = "2024-07-16"))]
    pub date: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "10:00 AM"))]
    pub slot: Option<String>,
    #[serde(default)]
    pub policy_accepted: bool,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

// --- Handlers ---

/// Handler returning the availability map of the listing's booking session.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/listings/{listing_id}/availability",
    params(("listing_id" = String, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Day status per ISO date", body = AvailabilityResponse),
        (status = 404, description = "Unknown listing")
    ),
    tag = "Calendar"
))]
pub async fn get_availability_handler(
    State(state): State<Arc<CalendarState>>,
    Path(listing_id): Path<String>,
) -> Result<Json<AvailabilityResponse>, HireloopError> {
    let listing = state.listing(&listing_id).await?;
    let today = state.clock.today();
    let availability = state.availability.availability(&listing.id, today);

    Ok(Json(AvailabilityResponse {
        listing_id: listing.id,
        today,
        availability: availability.as_ref().clone(),
    }))
}

/// Handler returning one month of calendar cells.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/listings/{listing_id}/calendar",
    params(("listing_id" = String, Path, description = "Listing id"), MonthQuery),
    responses(
        (status = 200, description = "Month grid, Sunday-first weeks", body = MonthGrid),
        (status = 400, description = "Invalid month"),
        (status = 404, description = "Unknown listing")
    ),
    tag = "Calendar"
))]
pub async fn get_calendar_handler(
    State(state): State<Arc<CalendarState>>,
    Path(listing_id): Path<String>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthGrid>, HireloopError> {
    let listing = state.listing(&listing_id).await?;
    let today = state.clock.today();
    let availability = state.availability.availability(&listing.id, today);
    let view = CalendarView {
        today,
        availability: &availability,
        policy: state.availability.policy(),
        fallback_slots: &state.fallback_slots,
    };

    let grid = view.month_grid(
        query.year.unwrap_or_else(|| today.year()),
        query.month.unwrap_or_else(|| today.month()),
    )?;
    Ok(Json(grid))
}

/// Handler returning the time slots offered on a day.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/listings/{listing_id}/slots",
    params(("listing_id" = String, Path, description = "Listing id"), SlotsQuery),
    responses(
        (status = 200, description = "Slots for the day", body = SlotsResponse),
        (status = 400, description = "Invalid date"),
        (status = 404, description = "Unknown listing")
    ),
    tag = "Calendar"
))]
pub async fn get_slots_handler(
    State(state): State<Arc<CalendarState>>,
    Path(listing_id): Path<String>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, HireloopError> {
    let day = parse_day(&query.date)?;
    let listing = state.listing(&listing_id).await?;
    let today = state.clock.today();
    let availability = state.availability.availability(&listing.id, today);
    let view = CalendarView {
        today,
        availability: &availability,
        policy: state.availability.policy(),
        fallback_slots: &state.fallback_slots,
    };

    let mut selection = Selection::new(&listing.id);
    let slots = match selection.select_day(day, &view, &listing) {
        Ok(slots) => slots.to_vec(),
        Err(_) => Vec::new(),
    };

    Ok(Json(SlotsResponse {
        date: day,
        status: view.status(day),
        disabled: view.is_disabled(day),
        slots,
    }))
}

/// Handler ending the listing's booking session.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/listings/{listing_id}/session",
    params(("listing_id" = String, Path, description = "Listing id")),
    responses(
        (status = 204, description = "Session ended, availability is regenerated on next use"),
        (status = 404, description = "Unknown listing")
    ),
    tag = "Calendar"
))]
pub async fn reset_session_handler(
    State(state): State<Arc<CalendarState>>,
    Path(listing_id): Path<String>,
) -> Result<StatusCode, HireloopError> {
    let listing = state.listing(&listing_id).await?;
    state.availability.reset(&listing.id);
    Ok(StatusCode::NO_CONTENT)
}

/// Handler validating a booking submission and emitting the booking request.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/listings/{listing_id}/bookings",
    params(("listing_id" = String, Path, description = "Listing id")),
    request_body = BookingSubmission,
    responses(
        (status = 202, description = "Booking requested", body = BookingRequest),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Sign-in required"),
        (status = 404, description = "Unknown listing"),
        (status = 422, description = "Selection incomplete or not bookable")
    ),
    security(("bearer" = [])),
    tag = "Calendar"
))]
pub async fn request_booking_handler(
    State(state): State<Arc<CalendarState>>,
    Path(listing_id): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<BookingSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingRequest>), HireloopError> {
    let session = state
        .sessions
        .resolve_session(bearer_token(&headers))
        .await?;
    state.gate.authorize(&session)?;
    // The body is only looked at once the caller is signed in
    let Json(submission) =
        payload.map_err(|rejection| HireloopError::ParseError(rejection.body_text()))?;

    let listing = state.listing(&listing_id).await?;
    let today = state.clock.today();
    let availability = state.availability.availability(&listing.id, today);
    let view = CalendarView {
        today,
        availability: &availability,
        policy: state.availability.policy(),
        fallback_slots: &state.fallback_slots,
    };

    let mut selection = Selection::new(&listing.id);
    if let Some(date) = submission.date.as_deref() {
        let day = parse_day(date)?;
        selection.select_day(day, &view, &listing)?;
        if let Some(slot) = submission.slot.as_deref() {
            selection.select_slot(slot)?;
        }
    }
    selection.set_policy_accepted(submission.policy_accepted);
    debug!(
        listing = %listing.id,
        stage = ?selection.stage(&listing, &session),
        "Evaluating booking submission"
    );

    let request = state.gate.submit(&session, &listing, &selection)?;
    Ok((StatusCode::ACCEPTED, Json(request)))
}
