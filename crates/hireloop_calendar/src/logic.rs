// --- File: crates/hireloop_calendar/src/logic.rs ---
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use hireloop_common::HireloopError;
use hireloop_config::CalendarConfig;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// A calendar day. Day granularity, no time of day.
pub type Day = NaiveDate;

/// An opaque time slot label such as "9:00 AM".
pub type TimeSlot = String;

/// Canonical date key format of an [`AvailabilityMap`].
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// The weekday the marketplace does not operate on unless a status overrides it.
pub const DEFAULT_CLOSED_WEEKDAY: Weekday = Weekday::Sun;

/// Offered when a listing does not configure its own slots.
pub const DEFAULT_TIME_SLOTS: [&str; 7] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
];

// --- Error Handling ---
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid weekday '{0}'")]
    InvalidWeekday(String),
    #[error("Invalid month {month} of year {year}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("Invalid time zone '{0}'")]
    InvalidTimeZone(String),
    #[error("Availability weights must not all be zero")]
    InvalidWeights,
}

impl From<CalendarError> for HireloopError {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::InvalidDate(_) | CalendarError::InvalidMonth { .. } => {
                HireloopError::ValidationError(err.to_string())
            }
            CalendarError::InvalidWeekday(_)
            | CalendarError::InvalidTimeZone(_)
            | CalendarError::InvalidWeights => HireloopError::ConfigError(err.to_string()),
        }
    }
}

// --- Data Structures ---

/// Bookability of one calendar day for one listing.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Partial,
    Occupied,
    Unavailable,
}

impl AvailabilityStatus {
    /// Only available and partial days expose time slots.
    pub fn is_bookable(self) -> bool {
        matches!(self, AvailabilityStatus::Available | AvailabilityStatus::Partial)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "available",
            AvailabilityStatus::Partial => "partial",
            AvailabilityStatus::Occupied => "occupied",
            AvailabilityStatus::Unavailable => "unavailable",
        }
    }

    /// Presentation class of a calendar cell carrying this status.
    pub fn css_class(self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "status-available",
            AvailabilityStatus::Partial => "status-partial",
            AvailabilityStatus::Occupied => "status-occupied",
            AvailabilityStatus::Unavailable => "status-unavailable",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ISO `yyyy-MM-dd` key of a day.
pub fn date_key(day: Day) -> String {
    day.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a `yyyy-MM-dd` string into a day.
pub fn parse_day(value: &str) -> Result<Day, CalendarError> {
    NaiveDate::parse_from_str(value.trim(), DATE_KEY_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(value.to_string()))
}

/// Day status keyed by ISO date. Iterates in date order.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityMap(BTreeMap<String, AvailabilityStatus>);

impl AvailabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status of a day, replacing any previous one.
    pub fn insert(&mut self, day: Day, status: AvailabilityStatus) {
        self.0.insert(date_key(day), status);
    }

    pub fn status(&self, day: Day) -> Option<AvailabilityStatus> {
        self.0.get(&date_key(day)).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, AvailabilityStatus)> {
        self.0.iter().map(|(key, status)| (key.as_str(), *status))
    }
}

impl FromIterator<(Day, AvailabilityStatus)> for AvailabilityMap {
    fn from_iter<I: IntoIterator<Item = (Day, AvailabilityStatus)>>(iter: I) -> Self {
        let mut map = AvailabilityMap::new();
        for (day, status) in iter {
            map.insert(day, status);
        }
        map
    }
}

/// Days closed regardless of weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet(BTreeSet<Day>);

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses holidays given as `yyyy-MM-dd` strings.
    pub fn parse<S: AsRef<str>>(values: &[S]) -> Result<Self, CalendarError> {
        values.iter().map(|value| parse_day(value.as_ref())).collect()
    }

    pub fn insert(&mut self, day: Day) -> bool {
        self.0.insert(day)
    }

    pub fn contains(&self, day: Day) -> bool {
        self.0.contains(&day)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Day> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = Day>>(iter: I) -> Self {
        HolidaySet(iter.into_iter().collect())
    }
}

/// Operating rules of the marketplace calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPolicy {
    pub closed_weekday: Weekday,
    pub holidays: HolidaySet,
}

impl Default for CalendarPolicy {
    fn default() -> Self {
        Self {
            closed_weekday: DEFAULT_CLOSED_WEEKDAY,
            holidays: HolidaySet::new(),
        }
    }
}

impl CalendarPolicy {
    pub fn new(closed_weekday: Weekday, holidays: HolidaySet) -> Self {
        Self {
            closed_weekday,
            holidays,
        }
    }

    /// Builds the policy from the `calendar` config section.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, CalendarError> {
        let closed_weekday = match config.closed_weekday.as_deref() {
            Some(name) => name
                .trim()
                .parse::<Weekday>()
                .map_err(|_| CalendarError::InvalidWeekday(name.to_string()))?,
            None => DEFAULT_CLOSED_WEEKDAY,
        };
        let holidays = HolidaySet::parse(&config.holidays)?;
        debug!(
            "Calendar policy: closed on {:?}, {} holidays",
            closed_weekday,
            holidays.len()
        );
        Ok(Self::new(closed_weekday, holidays))
    }

    /// True for the non-operating weekday and for holidays.
    pub fn is_closed(&self, day: Day) -> bool {
        day.weekday() == self.closed_weekday || self.holidays.contains(day)
    }
}

/// Slot list offered when a listing configures none.
pub fn default_time_slots() -> Vec<TimeSlot> {
    DEFAULT_TIME_SLOTS.iter().map(|slot| slot.to_string()).collect()
}

// --- Availability Generation ---

/// First and last day covered by a map generated on `today`: the first of the
/// current month through the last day of the month `horizon_months - 1` ahead.
pub fn availability_window(today: Day, horizon_months: u32) -> (Day, Day) {
    let start = today.with_day(1).unwrap_or(today);
    let end = start
        .checked_add_months(Months::new(horizon_months.max(1)))
        .and_then(|next| next.pred_opt())
        .unwrap_or(start);
    (start, end)
}

/// Generates the availability map of one booking session.
///
/// Past days and closed days are `unavailable`; every other day takes the
/// status returned by `draw`, which stands in for a scheduling backend.
pub fn generate_availability<F>(
    today: Day,
    policy: &CalendarPolicy,
    horizon_months: u32,
    mut draw: F,
) -> AvailabilityMap
where
    F: FnMut(Day) -> AvailabilityStatus,
{
    let (start, end) = availability_window(today, horizon_months);
    debug!("Generating availability for {} - {}", start, end);

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| {
            let status = if day < today || policy.is_closed(day) {
                AvailabilityStatus::Unavailable
            } else {
                draw(day)
            };
            (day, status)
        })
        .collect()
}

// --- Day Disablement ---

/// Decides whether the calendar must prevent selecting `day`.
///
/// Order: past days first, then the stored status, then the closed-day default
/// for days with no bookable status. An open day with no stored status stays
/// enabled.
pub fn is_day_disabled(
    day: Day,
    today: Day,
    availability: &AvailabilityMap,
    policy: &CalendarPolicy,
) -> bool {
    if day < today {
        return true;
    }
    let status = availability.status(day);
    if matches!(
        status,
        Some(AvailabilityStatus::Occupied) | Some(AvailabilityStatus::Unavailable)
    ) {
        return true;
    }
    let overridden = status.map(AvailabilityStatus::is_bookable).unwrap_or(false);
    policy.is_closed(day) && !overridden
}

// --- Slot Resolution ---

/// Time slots offerable on a day with the given status.
///
/// Non-bookable days get nothing; otherwise the listing's own slots verbatim,
/// or `fallback` when the listing has none.
pub fn resolve_slots(
    status: Option<AvailabilityStatus>,
    listing_slots: &[TimeSlot],
    fallback: &[TimeSlot],
) -> Vec<TimeSlot> {
    match status {
        Some(status) if status.is_bookable() => {
            if listing_slots.is_empty() {
                fallback.to_vec()
            } else {
                listing_slots.to_vec()
            }
        }
        _ => Vec::new(),
    }
}

// --- Month Grid ---

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = Date))]
    pub date: Day,
    /// False for the leading/trailing days of neighbouring months.
    pub in_month: bool,
    pub status: Option<AvailabilityStatus>,
    pub disabled: bool,
    #[cfg_attr(feature = "openapi", schema(example = "day status-available"))]
    pub css_class: String,
}

/// A month laid out in Sunday-first weeks.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Vec<CalendarCell>>,
}

fn cell_class(status: Option<AvailabilityStatus>, disabled: bool) -> String {
    let status_class = status.map(AvailabilityStatus::css_class).unwrap_or("status-unknown");
    if disabled {
        format!("day {} day-disabled", status_class)
    } else {
        format!("day {}", status_class)
    }
}

/// Builds the month grid shown by the calendar widget.
pub fn month_grid(
    year: i32,
    month: u32,
    today: Day,
    availability: &AvailabilityMap,
    policy: &CalendarPolicy,
) -> Result<MonthGrid, CalendarError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(CalendarError::InvalidMonth { year, month })?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(CalendarError::InvalidMonth { year, month })?;

    let lead = u64::from(first.weekday().num_days_from_sunday());
    let trail = 6 - u64::from(last.weekday().num_days_from_sunday());
    // Padding days may fall outside the representable range
    let grid_start = first
        .checked_sub_days(Days::new(lead))
        .ok_or(CalendarError::InvalidMonth { year, month })?;
    let grid_end = last
        .checked_add_days(Days::new(trail))
        .ok_or(CalendarError::InvalidMonth { year, month })?;

    let cells: Vec<CalendarCell> = grid_start
        .iter_days()
        .take_while(|day| *day <= grid_end)
        .map(|day| {
            let status = availability.status(day);
            let disabled = is_day_disabled(day, today, availability, policy);
            CalendarCell {
                date: day,
                in_month: day.month() == month && day.year() == year,
                status,
                disabled,
                css_class: cell_class(status, disabled),
            }
        })
        .collect();

    let weeks = cells.chunks(7).map(|week| week.to_vec()).collect();
    Ok(MonthGrid { year, month, weeks })
}

/// Everything the calendar needs to judge days for one booking session.
#[derive(Debug, Clone, Copy)]
pub struct CalendarView<'a> {
    pub today: Day,
    pub availability: &'a AvailabilityMap,
    pub policy: &'a CalendarPolicy,
    pub fallback_slots: &'a [TimeSlot],
}

impl<'a> CalendarView<'a> {
    pub fn status(&self, day: Day) -> Option<AvailabilityStatus> {
        self.availability.status(day)
    }

    pub fn is_disabled(&self, day: Day) -> bool {
        is_day_disabled(day, self.today, self.availability, self.policy)
    }

    pub fn slots_for(&self, day: Day, listing_slots: &[TimeSlot]) -> Vec<TimeSlot> {
        resolve_slots(self.status(day), listing_slots, self.fallback_slots)
    }

    pub fn month_grid(&self, year: i32, month: u32) -> Result<MonthGrid, CalendarError> {
        month_grid(year, month, self.today, self.availability, self.policy)
    }
}
