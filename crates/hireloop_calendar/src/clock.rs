// --- File: crates/hireloop_calendar/src/clock.rs ---
use chrono::Utc;
use chrono_tz::Tz;
use std::str::FromStr;

use crate::logic::{CalendarError, Day};

/// Source of "today" for the calendar.
pub trait Clock: Send + Sync {
    fn today(&self) -> Day;
}

/// Today's date in a fixed time zone.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    time_zone: Tz,
}

impl ZonedClock {
    pub fn new(time_zone: Tz) -> Self {
        Self { time_zone }
    }

    /// Accepts IANA names such as "Europe/Zurich"; `None` means UTC.
    pub fn from_name(name: Option<&str>) -> Result<Self, CalendarError> {
        match name {
            Some(name) => Tz::from_str(name.trim())
                .map(Self::new)
                .map_err(|_| CalendarError::InvalidTimeZone(name.to_string())),
            None => Ok(Self::new(Tz::UTC)),
        }
    }
}

impl Clock for ZonedClock {
    fn today(&self) -> Day {
        Utc::now().with_timezone(&self.time_zone).date_naive()
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Day);

impl Clock for FixedClock {
    fn today(&self) -> Day {
        self.0
    }
}
