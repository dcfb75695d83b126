//! Availability providers.
//!
//! The calendar only needs an [`AvailabilityMap`] per listing. Where it comes
//! from is behind [`AvailabilityProvider`]: the simulated provider draws
//! weighted random statuses, the fixed provider serves maps loaded from
//! elsewhere (a scheduling backend, a fixture file).

use std::collections::HashMap;

use chrono::Datelike;
use hireloop_config::AvailabilityWeights;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::logic::{
    generate_availability, AvailabilityMap, AvailabilityStatus, CalendarError, CalendarPolicy,
    Day,
};

/// Produces the availability map of a listing for a booking session.
pub trait AvailabilityProvider: Send + Sync {
    fn availability(&self, listing_id: &str, today: Day, policy: &CalendarPolicy)
        -> AvailabilityMap;
}

const DRAWN_STATUSES: [AvailabilityStatus; 3] = [
    AvailabilityStatus::Available,
    AvailabilityStatus::Partial,
    AvailabilityStatus::Occupied,
];

/// Simulated scheduling backend.
///
/// Open days get `available`/`partial`/`occupied` with the configured weights
/// (40/30/30 by default). With a seed, the map is deterministic per
/// (seed, listing, today); without one every call draws afresh.
#[derive(Debug, Clone)]
pub struct SimulatedAvailabilityProvider {
    distribution: WeightedIndex<u64>,
    horizon_months: u32,
    seed: Option<u64>,
}

impl SimulatedAvailabilityProvider {
    pub fn new(
        weights: &AvailabilityWeights,
        horizon_months: u32,
        seed: Option<u64>,
    ) -> Result<Self, CalendarError> {
        // Summed in u64 so three u32 weights cannot overflow the total
        let distribution = WeightedIndex::new(
            [weights.available, weights.partial, weights.occupied].map(u64::from),
        )
        .map_err(|_| CalendarError::InvalidWeights)?;
        Ok(Self {
            distribution,
            horizon_months,
            seed,
        })
    }

    fn rng_for(&self, listing_id: &str, today: Day) -> StdRng {
        match self.seed {
            Some(seed) => {
                let day_number = u64::try_from(today.num_days_from_ce()).unwrap_or_default();
                StdRng::seed_from_u64(seed ^ stable_hash(listing_id) ^ day_number)
            }
            None => StdRng::from_entropy(),
        }
    }
}

impl AvailabilityProvider for SimulatedAvailabilityProvider {
    fn availability(
        &self,
        listing_id: &str,
        today: Day,
        policy: &CalendarPolicy,
    ) -> AvailabilityMap {
        let mut rng = self.rng_for(listing_id, today);
        let map = generate_availability(today, policy, self.horizon_months, |_| {
            DRAWN_STATUSES[self.distribution.sample(&mut rng)]
        });
        debug!(
            "Simulated availability for listing {}: {} days",
            listing_id,
            map.len()
        );
        map
    }
}

// FNV-1a, stable across processes unlike the std hasher.
fn stable_hash(value: &str) -> u64 {
    value.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

/// Serves pre-computed maps per listing. Unknown listings get an empty map.
#[derive(Debug, Clone, Default)]
pub struct FixedAvailabilityProvider {
    maps: HashMap<String, AvailabilityMap>,
}

impl FixedAvailabilityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, listing_id: impl Into<String>, map: AvailabilityMap) -> Self {
        self.maps.insert(listing_id.into(), map);
        self
    }
}

impl AvailabilityProvider for FixedAvailabilityProvider {
    fn availability(
        &self,
        listing_id: &str,
        _today: Day,
        _policy: &CalendarPolicy,
    ) -> AvailabilityMap {
        self.maps.get(listing_id).cloned().unwrap_or_default()
    }
}
