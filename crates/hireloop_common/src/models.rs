// --- File: crates/hireloop_common/src/models.rs ---

// Records exchanged with the collaborators around the booking calendar:
// listings come from a listings provider, sessions from the identity provider,
// booking requests go out to the hosting application.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of offering a listing is.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingCategory {
    Talent,
    Service,
    Facility,
}

/// A bookable marketplace listing.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    #[cfg_attr(feature = "openapi", schema(example = "tal-001"))]
    pub id: String,
    pub title: String,
    /// Price per booking in the smallest currency unit (e.g. cents).
    #[cfg_attr(feature = "openapi", schema(example = 4500))]
    pub rate: i64,
    #[cfg_attr(feature = "openapi", schema(example = "USD"))]
    pub currency: String,
    pub category: ListingCategory,
    pub location: String,
    /// Time slot labels in display order. Empty means "use the default slots".
    #[serde(default)]
    pub slots: Vec<String>,
    /// Cancellation/house policy the booker must accept, if any.
    #[serde(default)]
    pub policy: Option<String>,
}

impl Listing {
    /// True when the listing carries a non-blank policy text.
    pub fn requires_policy_acceptance(&self) -> bool {
        self.policy
            .as_deref()
            .map(|text| !text.trim().is_empty())
            .unwrap_or(false)
    }
}

/// The acting user's session as reported by the identity provider.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserSession {
    pub authenticated: bool,
    pub user_ref: Option<String>,
}

impl UserSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user_ref: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            user_ref: Some(user_ref.into()),
        }
    }

    /// The identity reference, only for an authenticated session.
    pub fn acting_user(&self) -> Option<&str> {
        if self.authenticated {
            self.user_ref.as_deref()
        } else {
            None
        }
    }
}

/// Emitted once all submission preconditions hold.
///
/// The hosting application owns persistence, notification and payment; the
/// calendar never stores or transmits this record itself.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingRequest {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = Uuid))]
    pub id: Uuid,
    pub listing_id: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = Date, example = "2024-07-16"))]
    pub date: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(example = "10:00 AM"))]
    pub slot: String,
    pub user_ref: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = DateTime))]
    pub requested_at: DateTime<Utc>,
}

impl BookingRequest {
    pub fn new(listing_id: String, date: NaiveDate, slot: String, user_ref: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            listing_id,
            date,
            slot,
            user_ref,
            requested_at: Utc::now(),
        }
    }
}
