// File: crates/hireloop_calendar/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{AvailabilityResponse, BookingSubmission, SlotsResponse};
use crate::logic::{AvailabilityMap, AvailabilityStatus, CalendarCell, MonthGrid};
use hireloop_common::BookingRequest;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_availability_handler,
        crate::handlers::get_calendar_handler,
        crate::handlers::get_slots_handler,
        crate::handlers::reset_session_handler,
        crate::handlers::request_booking_handler,
    ),
    components(schemas(
        AvailabilityStatus,
        AvailabilityMap,
        AvailabilityResponse,
        CalendarCell,
        MonthGrid,
        SlotsResponse,
        BookingSubmission,
        BookingRequest,
    )),
    tags(
        (name = "Calendar", description = "Availability calendar, slots and booking requests")
    )
)]
pub struct CalendarApiDoc;
