// --- File: crates/hireloop_calendar/src/gate.rs ---
use hireloop_common::{BookingRequest, BookingSink, HireloopError, Listing, UserSession};
use thiserror::Error;
use tracing::{debug, info};

use crate::logic::{Day, TimeSlot};
use crate::selection::Selection;

/// Why a selection or submission was refused. All are fixed by user action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Please sign in to request a booking")]
    NotAuthenticated,
    #[error("Please select a date")]
    MissingDate,
    #[error("Please select a time slot")]
    MissingSlot,
    #[error("Please accept the listing policy")]
    PolicyNotAccepted,
    #[error("{0} cannot be booked")]
    DayNotSelectable(Day),
    #[error("Time slot '{0}' is not offered for the selected day")]
    SlotNotOffered(TimeSlot),
}

impl BookingError {
    pub fn kind(&self) -> &'static str {
        match self {
            BookingError::NotAuthenticated => "not_authenticated",
            BookingError::MissingDate => "missing_date",
            BookingError::MissingSlot => "missing_slot",
            BookingError::PolicyNotAccepted => "policy_not_accepted",
            BookingError::DayNotSelectable(_) => "day_not_selectable",
            BookingError::SlotNotOffered(_) => "slot_not_offered",
        }
    }
}

impl From<BookingError> for HireloopError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NotAuthenticated => HireloopError::AuthError(err.to_string()),
            other => hireloop_common::rejected(other.kind(), other),
        }
    }
}

/// Validates submissions and hands accepted ones to the hosting application.
pub struct BookingGate<S> {
    sink: S,
}

impl<S: BookingSink> BookingGate<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Sign-in check, run before any field validation.
    pub fn authorize<'a>(&self, session: &'a UserSession) -> Result<&'a str, BookingError> {
        session.acting_user().ok_or(BookingError::NotAuthenticated)
    }

    /// Checks every precondition without emitting anything.
    ///
    /// A selection made for another listing counts as no selection.
    pub fn validate(
        &self,
        session: &UserSession,
        listing: &Listing,
        selection: &Selection,
    ) -> Result<BookingRequest, BookingError> {
        let user_ref = self.authorize(session)?;

        let day = selection
            .day()
            .filter(|_| selection.listing_id() == listing.id)
            .ok_or(BookingError::MissingDate)?;
        let slot = selection.slot().ok_or(BookingError::MissingSlot)?;
        if listing.requires_policy_acceptance() && !selection.policy_accepted() {
            return Err(BookingError::PolicyNotAccepted);
        }

        Ok(BookingRequest::new(
            listing.id.clone(),
            day,
            slot.to_string(),
            user_ref.to_string(),
        ))
    }

    /// Validates and, on success, emits exactly one booking request.
    pub fn submit(
        &self,
        session: &UserSession,
        listing: &Listing,
        selection: &Selection,
    ) -> Result<BookingRequest, BookingError> {
        let request = match self.validate(session, listing, selection) {
            Ok(request) => request,
            Err(err) => {
                debug!("Booking submission for {} refused: {}", listing.id, err.kind());
                return Err(err);
            }
        };
        info!(
            "Booking requested: id={} listing={} date={} slot={} user={}",
            request.id, request.listing_id, request.date, request.slot, request.user_ref
        );
        self.sink.emit(request.clone());
        Ok(request)
    }
}
