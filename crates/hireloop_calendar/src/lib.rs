// --- File: crates/hireloop_calendar/src/lib.rs ---
pub mod clock;
pub mod doc;
pub mod gate;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
#[cfg(test)]
mod logic_test;
pub mod provider;
#[cfg(test)]
mod provider_test;
pub mod routes;
pub mod selection;
pub mod session;

pub use clock::{Clock, FixedClock, ZonedClock};
pub use gate::{BookingError, BookingGate};
pub use handlers::CalendarState;
pub use logic::{
    AvailabilityMap, AvailabilityStatus, CalendarError, CalendarPolicy, CalendarView, Day,
    HolidaySet, TimeSlot,
};
pub use provider::{AvailabilityProvider, FixedAvailabilityProvider, SimulatedAvailabilityProvider};
pub use routes::routes;
pub use selection::{BookingStage, Selection};
pub use session::AvailabilitySessions;
