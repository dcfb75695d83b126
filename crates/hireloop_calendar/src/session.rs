// --- File: crates/hireloop_calendar/src/session.rs ---
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info};

use crate::logic::{AvailabilityMap, CalendarPolicy, Day};
use crate::provider::AvailabilityProvider;

struct SessionEntry {
    generated_on: Day,
    availability: Arc<AvailabilityMap>,
}

/// Availability maps of the open booking sessions, one per listing.
///
/// A map is generated on first use and then served unchanged until the day
/// rolls over or the session is reset, so every request of a session judges
/// days against the same statuses.
pub struct AvailabilitySessions {
    provider: Arc<dyn AvailabilityProvider>,
    policy: Arc<CalendarPolicy>,
    sessions: RwLock<HashMap<String, SessionEntry>>,
}

impl AvailabilitySessions {
    pub fn new(provider: Arc<dyn AvailabilityProvider>, policy: Arc<CalendarPolicy>) -> Self {
        Self {
            provider,
            policy,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn policy(&self) -> &CalendarPolicy {
        &self.policy
    }

    /// The session map for `listing_id`, generating it if needed.
    pub fn availability(&self, listing_id: &str, today: Day) -> Arc<AvailabilityMap> {
        {
            let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(entry) = sessions.get(listing_id) {
                if entry.generated_on == today {
                    return entry.availability.clone();
                }
            }
        }

        let generated = Arc::new(self.provider.availability(listing_id, today, &self.policy));
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        // Another request may have generated the same session meanwhile; keep the first.
        if let Some(entry) = sessions.get(listing_id) {
            if entry.generated_on == today {
                return entry.availability.clone();
            }
        }
        info!(
            "Opened booking session for listing {} on {} ({} days)",
            listing_id,
            today,
            generated.len()
        );
        sessions.insert(
            listing_id.to_string(),
            SessionEntry {
                generated_on: today,
                availability: generated.clone(),
            },
        );
        generated
    }

    /// Discards the session of a listing; the next lookup generates a new map.
    pub fn reset(&self, listing_id: &str) -> bool {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(listing_id)
            .is_some();
        if removed {
            debug!("Reset booking session for listing {}", listing_id);
        }
        removed
    }
}
