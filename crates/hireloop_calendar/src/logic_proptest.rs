#[cfg(test)]
mod tests {
    use crate::logic::{
        default_time_slots, generate_availability, is_day_disabled, resolve_slots,
        AvailabilityMap, AvailabilityStatus, CalendarPolicy, CalendarView, HolidaySet,
    };
    use crate::selection::Selection;
    use chrono::{Datelike, Duration, NaiveDate, Weekday};
    use hireloop_common::{Listing, ListingCategory};
    use proptest::prelude::*;

    fn status_strategy() -> impl Strategy<Value = AvailabilityStatus> {
        prop_oneof![
            Just(AvailabilityStatus::Available),
            Just(AvailabilityStatus::Partial),
            Just(AvailabilityStatus::Occupied),
            Just(AvailabilityStatus::Unavailable),
        ]
    }

    fn base_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    }

    fn listing() -> Listing {
        Listing {
            id: "prop-listing".to_string(),
            title: "Property Listing".to_string(),
            rate: 1000,
            currency: "USD".to_string(),
            category: ListingCategory::Service,
            location: "Anywhere".to_string(),
            slots: vec![],
            policy: None,
        }
    }

    proptest! {
        // Past days are disabled whatever the map says
        #[test]
        fn test_past_days_always_disabled(
            days_back in 1..400i64,
            status in proptest::option::of(status_strategy()),
        ) {
            let today = base_day();
            let target = today - Duration::days(days_back);
            let mut map = AvailabilityMap::new();
            if let Some(status) = status {
                map.insert(target, status);
            }
            let policy = CalendarPolicy::default();
            prop_assert!(is_day_disabled(target, today, &map, &policy));
        }

        // Occupied and unavailable are never selectable
        #[test]
        fn test_occupied_and_unavailable_always_disabled(
            offset in -30..120i64,
            occupied in any::<bool>(),
        ) {
            let today = base_day();
            let target = today + Duration::days(offset);
            let status = if occupied {
                AvailabilityStatus::Occupied
            } else {
                AvailabilityStatus::Unavailable
            };
            let map: AvailabilityMap = [(target, status)].into_iter().collect();
            let policy = CalendarPolicy::default();
            prop_assert!(is_day_disabled(target, today, &map, &policy));
        }

        // Bookable statuses on open future days are selectable
        #[test]
        fn test_bookable_open_days_enabled(
            offset in 0..120i64,
            partial in any::<bool>(),
        ) {
            let today = base_day();
            let target = today + Duration::days(offset);
            prop_assume!(target.weekday() != Weekday::Sun);
            let status = if partial {
                AvailabilityStatus::Partial
            } else {
                AvailabilityStatus::Available
            };
            let map: AvailabilityMap = [(target, status)].into_iter().collect();
            let policy = CalendarPolicy::default();
            prop_assert!(!is_day_disabled(target, today, &map, &policy));
        }

        // Non-bookable statuses never expose slots
        #[test]
        fn test_non_bookable_days_have_no_slots(
            status in status_strategy(),
            slot_count in 0..6usize,
        ) {
            let listing_slots: Vec<String> =
                (0..slot_count).map(|i| format!("{}:00", 8 + i)).collect();
            let slots = resolve_slots(Some(status), &listing_slots, &default_time_slots());
            prop_assert_eq!(slots.is_empty(), !status.is_bookable());
        }

        // Generated maps agree with the predicate on past and closed days
        #[test]
        fn test_generated_map_respects_calendar_rules(
            day_offset in 0..365i64,
            horizon in 1..6u32,
            holiday_offset in 0..90i64,
            draws in proptest::collection::vec(status_strategy(), 1..8),
        ) {
            let today = base_day() + Duration::days(day_offset);
            let holiday = today + Duration::days(holiday_offset);
            let holidays: HolidaySet = [holiday].into_iter().collect();
            let policy = CalendarPolicy::new(Weekday::Sun, holidays);
            let mut i = 0usize;
            let map = generate_availability(today, &policy, horizon, |_| {
                i += 1;
                draws[i % draws.len()]
            });

            for (key, status) in map.iter() {
                let d = NaiveDate::parse_from_str(key, "%Y-%m-%d").unwrap();
                if d < today || policy.is_closed(d) {
                    prop_assert_eq!(status, AvailabilityStatus::Unavailable);
                    prop_assert!(is_day_disabled(d, today, &map, &policy));
                }
            }
        }

        // Changing the day never carries the old slot over
        #[test]
        fn test_day_change_clears_slot(
            first_offset in 1..60i64,
            second_offset in 1..60i64,
            second_status in status_strategy(),
        ) {
            let today = base_day();
            let first = today + Duration::days(first_offset);
            let second = today + Duration::days(second_offset);
            prop_assume!(first.weekday() != Weekday::Sun);
            prop_assume!(first != second);

            let mut map = AvailabilityMap::new();
            map.insert(first, AvailabilityStatus::Available);
            map.insert(second, second_status);
            let policy = CalendarPolicy::default();
            let fallback = default_time_slots();
            let view = CalendarView {
                today,
                availability: &map,
                policy: &policy,
                fallback_slots: &fallback,
            };

            let listing = listing();
            let mut selection = Selection::new(&listing.id);
            selection.select_day(first, &view, &listing).unwrap();
            selection.select_slot("9:00 AM").unwrap();
            prop_assert_eq!(selection.slot(), Some("9:00 AM"));

            let _ = selection.select_day(second, &view, &listing);
            prop_assert_eq!(selection.slot(), None);
        }
    }
}
