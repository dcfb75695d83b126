#[cfg(test)]
mod tests {
    use crate::logic::{
        availability_window, date_key, default_time_slots, generate_availability,
        is_day_disabled, month_grid, parse_day, resolve_slots, AvailabilityMap,
        AvailabilityStatus, CalendarError, CalendarPolicy, HolidaySet,
    };
    use chrono::{Datelike, NaiveDate, Weekday};
    use hireloop_config::CalendarConfig;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Monday 2024-07-15 with Christmas as the only holiday
    fn july_policy() -> (NaiveDate, CalendarPolicy) {
        let holidays: HolidaySet = [day(2024, 12, 25)].into_iter().collect();
        (day(2024, 7, 15), CalendarPolicy::new(Weekday::Sun, holidays))
    }

    #[test]
    fn test_past_sunday_is_disabled() {
        let (today, policy) = july_policy();
        let mut map = AvailabilityMap::new();
        map.insert(day(2024, 7, 14), AvailabilityStatus::Available);

        assert!(is_day_disabled(day(2024, 7, 14), today, &map, &policy));
    }

    #[test]
    fn test_future_sunday_without_override_is_disabled() {
        let (today, policy) = july_policy();
        let map = AvailabilityMap::new();
        assert!(is_day_disabled(day(2024, 7, 21), today, &map, &policy));

        let mut map = AvailabilityMap::new();
        map.insert(day(2024, 7, 21), AvailabilityStatus::Unavailable);
        assert!(is_day_disabled(day(2024, 7, 21), today, &map, &policy));
    }

    #[test]
    fn test_available_status_overrides_holiday() {
        let (today, policy) = july_policy();
        let mut map = AvailabilityMap::new();
        map.insert(day(2024, 12, 25), AvailabilityStatus::Available);

        assert!(!is_day_disabled(day(2024, 12, 25), today, &map, &policy));
    }

    #[test]
    fn test_partial_status_overrides_closed_weekday() {
        let (today, policy) = july_policy();
        let mut map = AvailabilityMap::new();
        map.insert(day(2024, 7, 28), AvailabilityStatus::Partial);

        assert!(!is_day_disabled(day(2024, 7, 28), today, &map, &policy));
    }

    #[test]
    fn test_unavailable_on_open_weekday_is_disabled() {
        let (today, policy) = july_policy();
        let mut map = AvailabilityMap::new();
        map.insert(day(2024, 7, 17), AvailabilityStatus::Unavailable);
        map.insert(day(2024, 7, 18), AvailabilityStatus::Occupied);
        map.insert(day(2024, 7, 19), AvailabilityStatus::Available);

        assert!(is_day_disabled(day(2024, 7, 17), today, &map, &policy));
        assert!(is_day_disabled(day(2024, 7, 18), today, &map, &policy));
        assert!(!is_day_disabled(day(2024, 7, 19), today, &map, &policy));
    }

    #[test]
    fn test_today_itself_is_not_past() {
        let (today, policy) = july_policy();
        let mut map = AvailabilityMap::new();
        map.insert(today, AvailabilityStatus::Available);

        assert!(!is_day_disabled(today, today, &map, &policy));
    }

    #[test]
    fn test_open_day_without_status_stays_enabled() {
        let (today, policy) = july_policy();
        let map = AvailabilityMap::new();
        assert!(!is_day_disabled(day(2024, 7, 16), today, &map, &policy));
    }

    #[test]
    fn test_generation_covers_current_and_next_two_months() {
        let (today, policy) = july_policy();
        let map = generate_availability(today, &policy, 3, |_| AvailabilityStatus::Available);

        // July (31) + August (31) + September (30)
        assert_eq!(map.len(), 92);
        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys.first(), Some(&"2024-07-01"));
        assert_eq!(keys.last(), Some(&"2024-09-30"));
    }

    #[test]
    fn test_generation_forces_past_and_closed_days_unavailable() {
        let (today, policy) = july_policy();
        let mut drawn = Vec::new();
        let map = generate_availability(today, &policy, 3, |d| {
            drawn.push(d);
            AvailabilityStatus::Partial
        });

        assert_eq!(map.status(day(2024, 7, 1)), Some(AvailabilityStatus::Unavailable));
        assert_eq!(map.status(day(2024, 7, 14)), Some(AvailabilityStatus::Unavailable));
        assert_eq!(map.status(day(2024, 7, 21)), Some(AvailabilityStatus::Unavailable));
        assert_eq!(map.status(day(2024, 7, 15)), Some(AvailabilityStatus::Partial));
        assert_eq!(map.status(day(2024, 9, 30)), Some(AvailabilityStatus::Partial));

        // The draw is only consulted for open days from today on
        assert!(drawn.iter().all(|d| *d >= today && d.weekday() != Weekday::Sun));
    }

    #[test]
    fn test_generation_marks_holidays_unavailable() {
        let today = day(2024, 12, 2);
        let holidays: HolidaySet = [day(2024, 12, 25)].into_iter().collect();
        let policy = CalendarPolicy::new(Weekday::Sun, holidays);
        let map = generate_availability(today, &policy, 1, |_| AvailabilityStatus::Available);

        assert_eq!(map.status(day(2024, 12, 25)), Some(AvailabilityStatus::Unavailable));
        assert_eq!(map.status(day(2024, 12, 24)), Some(AvailabilityStatus::Available));
    }

    #[test]
    fn test_availability_window_across_year_end() {
        let (start, end) = availability_window(day(2024, 11, 20), 3);
        assert_eq!(start, day(2024, 11, 1));
        assert_eq!(end, day(2025, 1, 31));

        // A zero horizon still covers the current month
        let (start, end) = availability_window(day(2024, 2, 10), 0);
        assert_eq!(start, day(2024, 2, 1));
        assert_eq!(end, day(2024, 2, 29));
    }

    #[test]
    fn test_resolve_slots() {
        let listing_slots = vec!["8:00 AM".to_string(), "6:00 PM".to_string()];
        let fallback = default_time_slots();

        assert!(resolve_slots(Some(AvailabilityStatus::Occupied), &listing_slots, &fallback)
            .is_empty());
        assert!(resolve_slots(Some(AvailabilityStatus::Unavailable), &listing_slots, &fallback)
            .is_empty());
        assert!(resolve_slots(None, &listing_slots, &fallback).is_empty());
        assert_eq!(
            resolve_slots(Some(AvailabilityStatus::Partial), &listing_slots, &fallback),
            listing_slots
        );
        assert_eq!(
            resolve_slots(Some(AvailabilityStatus::Available), &[], &fallback),
            fallback
        );
        assert_eq!(fallback.first().map(String::as_str), Some("9:00 AM"));
    }

    #[test]
    fn test_month_grid_layout() {
        let (today, policy) = july_policy();
        let mut map = AvailabilityMap::new();
        map.insert(day(2024, 7, 16), AvailabilityStatus::Available);
        map.insert(day(2024, 7, 17), AvailabilityStatus::Occupied);

        let grid = month_grid(2024, 7, today, &map, &policy).unwrap();
        assert_eq!(grid.year, 2024);
        assert_eq!(grid.month, 7);
        assert!(grid.weeks.iter().all(|week| week.len() == 7));

        // July 2024 starts on a Monday, so the grid starts on Sunday June 30
        let first = &grid.weeks[0][0];
        assert_eq!(first.date, day(2024, 6, 30));
        assert!(!first.in_month);
        assert_eq!(grid.weeks.last().unwrap()[6].date, day(2024, 8, 3));

        let cells: Vec<_> = grid.weeks.iter().flatten().collect();
        let available = cells.iter().find(|c| c.date == day(2024, 7, 16)).unwrap();
        assert!(!available.disabled);
        assert_eq!(available.css_class, "day status-available");

        let occupied = cells.iter().find(|c| c.date == day(2024, 7, 17)).unwrap();
        assert!(occupied.disabled);
        assert_eq!(occupied.css_class, "day status-occupied day-disabled");
    }

    #[test]
    fn test_month_grid_rejects_invalid_month() {
        let (today, policy) = july_policy();
        let result = month_grid(2024, 13, today, &AvailabilityMap::new(), &policy);
        assert_eq!(
            result.unwrap_err(),
            CalendarError::InvalidMonth {
                year: 2024,
                month: 13
            }
        );
    }

    #[test]
    fn test_month_grid_at_the_edges_of_the_calendar() {
        let (today, policy) = july_policy();
        let map = AvailabilityMap::new();

        // The first representable month starts on a Thursday
        let min_year = NaiveDate::MIN.year();
        assert_eq!(
            month_grid(min_year, 1, today, &map, &policy).unwrap_err(),
            CalendarError::InvalidMonth {
                year: min_year,
                month: 1
            }
        );
        let february = month_grid(min_year, 2, today, &map, &policy).unwrap();
        assert!(february.weeks.iter().all(|week| week.len() == 7));

        let max_year = NaiveDate::MAX.year();
        assert_eq!(
            month_grid(max_year, 12, today, &map, &policy).unwrap_err(),
            CalendarError::InvalidMonth {
                year: max_year,
                month: 12
            }
        );
    }

    #[test]
    fn test_date_keys_and_parsing() {
        assert_eq!(date_key(day(2024, 7, 5)), "2024-07-05");
        assert_eq!(parse_day("2024-07-05").unwrap(), day(2024, 7, 5));
        assert!(matches!(parse_day("07/05/2024"), Err(CalendarError::InvalidDate(_))));
    }

    #[test]
    fn test_map_serializes_with_iso_keys() {
        let mut map = AvailabilityMap::new();
        map.insert(day(2024, 7, 16), AvailabilityStatus::Partial);
        map.insert(day(2024, 7, 15), AvailabilityStatus::Available);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"2024-07-15":"available","2024-07-16":"partial"}"#);
    }

    #[test]
    fn test_policy_from_config() {
        let config = CalendarConfig {
            closed_weekday: Some("Monday".to_string()),
            holidays: vec!["2024-12-25".to_string()],
            ..CalendarConfig::default()
        };
        let policy = CalendarPolicy::from_config(&config).unwrap();
        assert_eq!(policy.closed_weekday, Weekday::Mon);
        assert!(policy.is_closed(day(2024, 12, 25)));
        assert!(policy.is_closed(day(2024, 7, 15)));
        assert!(!policy.is_closed(day(2024, 7, 14)));

        let defaults = CalendarPolicy::from_config(&CalendarConfig::default()).unwrap();
        assert_eq!(defaults.closed_weekday, Weekday::Sun);

        let bad = CalendarConfig {
            closed_weekday: Some("Funday".to_string()),
            ..CalendarConfig::default()
        };
        assert!(matches!(
            CalendarPolicy::from_config(&bad),
            Err(CalendarError::InvalidWeekday(_))
        ));
    }
}
