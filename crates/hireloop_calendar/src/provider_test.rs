#[cfg(test)]
mod tests {
    use crate::logic::{AvailabilityMap, AvailabilityStatus, CalendarError, CalendarPolicy};
    use crate::provider::{
        AvailabilityProvider, FixedAvailabilityProvider, SimulatedAvailabilityProvider,
    };
    use crate::session::AvailabilitySessions;
    use chrono::NaiveDate;
    use hireloop_config::AvailabilityWeights;
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    }

    #[test]
    fn test_seeded_provider_is_deterministic_per_listing() {
        let provider =
            SimulatedAvailabilityProvider::new(&AvailabilityWeights::default(), 3, Some(7))
                .unwrap();
        let policy = CalendarPolicy::default();

        let first = provider.availability("tal-001", today(), &policy);
        let second = provider.availability("tal-001", today(), &policy);
        assert_eq!(first, second);
        assert_eq!(first.len(), 92);
    }

    #[test]
    fn test_draw_only_produces_generator_statuses_for_open_days() {
        let provider =
            SimulatedAvailabilityProvider::new(&AvailabilityWeights::default(), 3, Some(11))
                .unwrap();
        let policy = CalendarPolicy::default();
        let map = provider.availability("svc-002", today(), &policy);

        let mut counts = [0usize; 4];
        for (_, status) in map.iter() {
            let index = match status {
                AvailabilityStatus::Available => 0,
                AvailabilityStatus::Partial => 1,
                AvailabilityStatus::Occupied => 2,
                AvailabilityStatus::Unavailable => 3,
            };
            counts[index] += 1;
        }
        // 14 past days in July plus 11 future Sundays are forced unavailable
        assert_eq!(counts[3], 14 + 11);
        assert_eq!(counts[0] + counts[1] + counts[2], 92 - 25);
    }

    #[test]
    fn test_weights_steer_the_draw() {
        let only_occupied = AvailabilityWeights {
            available: 0,
            partial: 0,
            occupied: 1,
        };
        let provider = SimulatedAvailabilityProvider::new(&only_occupied, 1, None).unwrap();
        let map = provider.availability("fac-003", today(), &CalendarPolicy::default());

        assert!(map.iter().all(|(_, status)| matches!(
            status,
            AvailabilityStatus::Occupied | AvailabilityStatus::Unavailable
        )));
    }

    #[test]
    fn test_zero_weights_are_rejected() {
        let zero = AvailabilityWeights {
            available: 0,
            partial: 0,
            occupied: 0,
        };
        let result = SimulatedAvailabilityProvider::new(&zero, 3, None);
        assert_eq!(result.unwrap_err(), CalendarError::InvalidWeights);
    }

    #[test]
    fn test_weights_summing_past_u32_are_accepted() {
        let huge = AvailabilityWeights {
            available: u32::MAX,
            partial: u32::MAX,
            occupied: 0,
        };
        let provider = SimulatedAvailabilityProvider::new(&huge, 3, Some(5)).unwrap();
        let map = provider.availability("tal-001", today(), &CalendarPolicy::default());

        assert!(map.iter().any(|(_, status)| status.is_bookable()));
        assert!(!map
            .iter()
            .any(|(_, status)| status == AvailabilityStatus::Occupied));
    }

    #[test]
    fn test_fixed_provider_serves_stored_maps() {
        let mut map = AvailabilityMap::new();
        map.insert(today(), AvailabilityStatus::Partial);
        let provider = FixedAvailabilityProvider::new().with_listing("tal-001", map.clone());

        let policy = CalendarPolicy::default();
        assert_eq!(provider.availability("tal-001", today(), &policy), map);
        assert!(provider.availability("unknown", today(), &policy).is_empty());
    }

    #[test]
    fn test_sessions_keep_one_map_per_listing_and_day() {
        let provider = Arc::new(
            SimulatedAvailabilityProvider::new(&AvailabilityWeights::default(), 3, None).unwrap(),
        );
        let sessions = AvailabilitySessions::new(provider, Arc::new(CalendarPolicy::default()));

        let first = sessions.availability("tal-001", today());
        let again = sessions.availability("tal-001", today());
        assert!(Arc::ptr_eq(&first, &again));

        let tomorrow = today().succ_opt().unwrap();
        let next_day = sessions.availability("tal-001", tomorrow);
        assert!(!Arc::ptr_eq(&first, &next_day));

        assert!(sessions.reset("tal-001"));
        assert!(!sessions.reset("tal-001"));
        let fresh = sessions.availability("tal-001", tomorrow);
        assert!(!Arc::ptr_eq(&next_day, &fresh));
    }
}
