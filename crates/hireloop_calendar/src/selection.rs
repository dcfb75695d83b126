// --- File: crates/hireloop_calendar/src/selection.rs ---
use hireloop_common::{Listing, UserSession};
use serde::Serialize;
use tracing::debug;

use crate::gate::BookingError;
use crate::logic::{CalendarView, Day, TimeSlot};

/// How far a booking session has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStage {
    /// No day selected.
    Idle,
    /// A day is selected, no slot yet.
    DateSelected,
    /// Day and slot selected, the listing policy still needs accepting.
    SlotSelected,
    /// The listing policy is accepted; only the sign-in is missing.
    PolicyAccepted,
    /// The booking gate would accept a submission.
    Submittable,
}

/// Transient selection of one booking session.
///
/// Bound to a single listing. The selected slot is always one of the slots
/// offered for the selected day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    listing_id: String,
    day: Option<Day>,
    slot: Option<TimeSlot>,
    offered_slots: Vec<TimeSlot>,
    policy_accepted: bool,
}

impl Selection {
    pub fn new(listing_id: impl Into<String>) -> Self {
        Self {
            listing_id: listing_id.into(),
            ..Self::default()
        }
    }

    pub fn listing_id(&self) -> &str {
        &self.listing_id
    }

    pub fn day(&self) -> Option<Day> {
        self.day
    }

    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    pub fn offered_slots(&self) -> &[TimeSlot] {
        &self.offered_slots
    }

    pub fn policy_accepted(&self) -> bool {
        self.policy_accepted
    }

    /// Switches the selection to another listing, discarding everything when it changes.
    pub fn switch_listing(&mut self, listing_id: &str) {
        if self.listing_id != listing_id {
            debug!("Listing changed from {} to {}", self.listing_id, listing_id);
            *self = Selection::new(listing_id);
        }
    }

    /// Selects a day and returns the slots offered for it.
    ///
    /// The previous slot is cleared first, also when the day is rejected.
    pub fn select_day(
        &mut self,
        day: Day,
        view: &CalendarView<'_>,
        listing: &Listing,
    ) -> Result<&[TimeSlot], BookingError> {
        self.slot = None;
        self.offered_slots.clear();

        if view.is_disabled(day) {
            self.day = None;
            return Err(BookingError::DayNotSelectable(day));
        }

        self.day = Some(day);
        self.offered_slots = view.slots_for(day, &listing.slots);
        Ok(&self.offered_slots)
    }

    /// Selects one of the slots offered for the selected day.
    pub fn select_slot(&mut self, slot: &str) -> Result<(), BookingError> {
        if self.day.is_none() {
            return Err(BookingError::MissingDate);
        }
        if !self.offered_slots.iter().any(|offered| offered == slot) {
            return Err(BookingError::SlotNotOffered(slot.to_string()));
        }
        self.slot = Some(slot.to_string());
        Ok(())
    }

    pub fn clear_slot(&mut self) {
        self.slot = None;
    }

    pub fn set_policy_accepted(&mut self, accepted: bool) {
        self.policy_accepted = accepted;
    }

    pub fn stage(&self, listing: &Listing, session: &UserSession) -> BookingStage {
        match (self.day, &self.slot) {
            (None, _) => BookingStage::Idle,
            (Some(_), None) => BookingStage::DateSelected,
            (Some(_), Some(_)) if session.acting_user().is_some() => {
                if listing.requires_policy_acceptance() && !self.policy_accepted {
                    BookingStage::SlotSelected
                } else {
                    BookingStage::Submittable
                }
            }
            (Some(_), Some(_)) if listing.requires_policy_acceptance() && self.policy_accepted => {
                BookingStage::PolicyAccepted
            }
            // Without a policy there is nothing to accept, only the sign-in is missing
            (Some(_), Some(_)) => BookingStage::SlotSelected,
        }
    }
}
