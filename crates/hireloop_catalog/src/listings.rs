// --- File: crates/hireloop_catalog/src/listings.rs ---
use std::collections::HashSet;
use std::time::Duration;

use hireloop_common::{BoxFuture, HireloopError, Listing, ListingCategory, ListingProvider};
use hireloop_config::CatalogConfig;
use tracing::{debug, info};

use crate::error::CatalogError;

/// Parses the `category` filter of the listings endpoint.
pub fn parse_category(value: &str) -> Result<ListingCategory, CatalogError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "talent" | "talents" => Ok(ListingCategory::Talent),
        "service" | "services" => Ok(ListingCategory::Service),
        "facility" | "facilities" => Ok(ListingCategory::Facility),
        _ => Err(CatalogError::UnknownCategory(value.to_string())),
    }
}

/// Listings held in memory, served with an artificial network delay.
#[derive(Debug, Clone)]
pub struct InMemoryListingProvider {
    listings: Vec<Listing>,
    latency: Duration,
}

impl InMemoryListingProvider {
    /// Rejects blank ids/titles, negative rates and duplicate ids.
    pub fn new(listings: Vec<Listing>, latency: Duration) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for listing in &listings {
            validate_listing(listing)?;
            if !seen.insert(listing.id.as_str()) {
                return Err(CatalogError::DuplicateListing(listing.id.clone()));
            }
        }
        Ok(Self { listings, latency })
    }

    /// The built-in marketplace catalog with the configured latency.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let provider = Self::new(
            mock_listings(),
            Duration::from_millis(config.simulated_latency_ms),
        )?;
        info!(
            "Catalog loaded with {} listings ({}ms simulated latency)",
            provider.len(),
            config.simulated_latency_ms
        );
        Ok(provider)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn validate_listing(listing: &Listing) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidListing {
        id: listing.id.clone(),
        reason: reason.to_string(),
    };
    if listing.id.trim().is_empty() {
        return Err(invalid("id is blank"));
    }
    if listing.title.trim().is_empty() {
        return Err(invalid("title is blank"));
    }
    if listing.rate < 0 {
        return Err(invalid("rate is negative"));
    }
    if listing.slots.iter().any(|slot| slot.trim().is_empty()) {
        return Err(invalid("contains a blank time slot"));
    }
    Ok(())
}

impl ListingProvider for InMemoryListingProvider {
    fn get_listing(&self, listing_id: &str) -> BoxFuture<'_, Option<Listing>, HireloopError> {
        let listing_id = listing_id.to_string();
        Box::pin(async move {
            self.simulate_latency().await;
            let found = self.listings.iter().find(|l| l.id == listing_id).cloned();
            debug!("Listing lookup '{}': found={}", listing_id, found.is_some());
            Ok(found)
        })
    }

    fn list_listings(
        &self,
        category: Option<ListingCategory>,
    ) -> BoxFuture<'_, Vec<Listing>, HireloopError> {
        Box::pin(async move {
            self.simulate_latency().await;
            Ok(self
                .listings
                .iter()
                .filter(|l| category.map_or(true, |c| l.category == c))
                .cloned()
                .collect())
        })
    }
}

fn listing(
    id: &str,
    title: &str,
    rate: i64,
    category: ListingCategory,
    location: &str,
    slots: &[&str],
    policy: Option<&str>,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        rate,
        currency: "USD".to_string(),
        category,
        location: location.to_string(),
        slots: slots.iter().map(|s| s.to_string()).collect(),
        policy: policy.map(str::to_string),
    }
}

/// Sample marketplace of talents, services and facilities.
pub fn mock_listings() -> Vec<Listing> {
    use ListingCategory::{Facility, Service, Talent};
    vec![
        listing(
            "tal-001",
            "Wedding Photographer",
            15000,
            Talent,
            "Riverside",
            &["8:00 AM", "1:00 PM", "5:00 PM"],
            Some("A 30% deposit is due on booking and is non-refundable."),
        ),
        listing(
            "tal-002",
            "Jazz Trio for Events",
            40000,
            Talent,
            "Downtown",
            &["6:00 PM", "8:00 PM"],
            Some("Cancellations within 7 days of the event are charged in full."),
        ),
        listing(
            "tal-003",
            "Private Yoga Instructor",
            6000,
            Talent,
            "Hillcrest",
            &[],
            None,
        ),
        listing(
            "svc-001",
            "Deep Home Cleaning",
            9000,
            Service,
            "Citywide",
            &[],
            None,
        ),
        listing(
            "svc-002",
            "Bike Repair Visit",
            4500,
            Service,
            "Old Town",
            &["9:00 AM", "11:00 AM", "2:00 PM"],
            Some("Parts are billed separately."),
        ),
        listing(
            "svc-003",
            "Event Catering for 20",
            120000,
            Service,
            "Harbor District",
            &["11:00 AM", "5:00 PM"],
            Some("Final guest count is required 72 hours ahead."),
        ),
        listing(
            "fac-001",
            "Community Hall",
            20000,
            Facility,
            "Old Town",
            &[],
            Some("Music must end by 10 PM. Cleaning fee applies."),
        ),
        listing(
            "fac-002",
            "Recording Studio",
            7500,
            Facility,
            "Arts Quarter",
            &["10:00 AM", "2:00 PM", "6:00 PM"],
            None,
        ),
        listing(
            "fac-003",
            "Rooftop Terrace",
            35000,
            Facility,
            "Downtown",
            &["4:00 PM", "7:00 PM"],
            Some("No glassware on the terrace. Deposit refunded after inspection."),
        ),
    ]
}
