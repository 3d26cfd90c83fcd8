//! Venue double-booking detection.
//!
//! # Invariants
//! - Only events on the candidate's date that share a venue are compared.
//! - Windows are half-open: an event ending when another starts is not a
//!   conflict.
//! - The first hit in venue-then-list order is reported.

use crate::model::clock::TimeWindow;
use crate::model::event::{Event, NewEvent};
use crate::model::venue::{venue_label, Venue, VenueId};
use std::fmt::{Display, Formatter};

/// An existing event blocking a candidate in one of its venues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// The already scheduled event.
    pub event: Event,
    /// Candidate venue in which the overlap was found.
    pub venue_id: VenueId,
}

impl Conflict {
    /// User-facing message naming the event, the venue and its window.
    ///
    /// Falls back to the venue id when `venues` does not contain it.
    pub fn describe(&self, venues: &[Venue]) -> String {
        format!(
            "Conflict detected!\n\n\"{}\" is already scheduled in {} during this time ({} - {}).",
            self.event.name,
            venue_label(venues, &self.venue_id),
            self.event.start_time,
            self.event.end_time
        )
    }
}

impl Display for Conflict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "venue {} is booked by `{}` ({} - {})",
            self.venue_id, self.event.id, self.event.start_time, self.event.end_time
        )
    }
}

/// Returns the first existing event that overlaps `candidate` in a shared
/// venue on the same date.
pub fn find_conflict(candidate: &NewEvent, existing: &[Event]) -> Option<Conflict> {
    let same_day: Vec<&Event> = existing
        .iter()
        .filter(|event| event.date == candidate.date)
        .collect();

    candidate.venue_ids.iter().find_map(|venue_id| {
        same_day
            .iter()
            .filter(|event| event.books_venue(venue_id))
            .find(|event| overlaps(candidate.window, event))
            .map(|event| Conflict {
                event: (*event).clone(),
                venue_id: venue_id.clone(),
            })
    })
}

fn overlaps(window: TimeWindow, event: &Event) -> bool {
    window.start() < event.end_time && window.end() > event.start_time
}
