//! Venue domain model.
//!
//! # Invariants
//! - `id` is unique across the venue collection.
//! - Venues are never renamed or removed once persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable venue identifier as stored in `venueIds`.
pub type VenueId = String;

/// Number of venues every board starts with.
pub const DEFAULT_VENUE_COUNT: usize = 5;

/// A named location events can be booked into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
}

impl Venue {
    pub fn new(id: impl Into<VenueId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Generates a fresh id for a user-added venue.
pub fn new_venue_id() -> VenueId {
    format!("venue-{}", Uuid::new_v4().simple())
}

/// Baseline venues `venue-1..venue-5` named `Venue 1..Venue 5`.
pub fn default_venues() -> Vec<Venue> {
    (1..=DEFAULT_VENUE_COUNT)
        .map(|n| Venue::new(format!("venue-{n}"), format!("Venue {n}")))
        .collect()
}

/// Looks up a display name, falling back to the raw id.
pub fn venue_label<'a>(venues: &'a [Venue], id: &'a str) -> &'a str {
    venues
        .iter()
        .find(|venue| venue.id == id)
        .map_or(id, |venue| venue.name.as_str())
}
