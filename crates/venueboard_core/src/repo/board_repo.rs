//! Board repository over a key-value store.
//!
//! # Responsibility
//! - Encode venue and event collections as JSON arrays under fixed keys.
//! - Merge the default venues into whatever is stored and heal the stored
//!   copy when it drifts.
//! - Seed one example event into an empty board.
//!
//! # Invariants
//! - Every mutation reads the full collection, changes it in memory, and
//!   writes the full collection back.
//! - Write paths call `Event::validate()` before persisting.
//! - Read paths reject malformed or invariant-violating data as
//!   `RepoError::Corrupt` instead of masking it.

use crate::model::clock::ClockTime;
use crate::model::event::{Event, EventId, ValidationError};
use crate::model::venue::{default_venues, new_venue_id, Venue};
use crate::store::{CollectionKind, KeyValueStore, StoreError};
use chrono::NaiveDate;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Id of the example event written by `seed_events`.
pub const SEED_EVENT_ID: &str = "evt-1";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for board persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Store(StoreError),
    /// Stored payload cannot be decoded or violates the model.
    Corrupt { key: &'static str, message: String },
    NotFound(EventId),
    DuplicateEvent(EventId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Corrupt { key, message } => {
                write!(f, "stored collection `{key}` is corrupt: {message}")
            }
            Self::NotFound(id) => write!(f, "event not found: {id}"),
            Self::DuplicateEvent(id) => write!(f, "event id already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Corrupt { .. } | Self::NotFound(_) | Self::DuplicateEvent(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Typed access to the venue and event collections.
pub struct BoardRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> BoardRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the underlying store accepts writes.
    pub fn is_writable(&self) -> bool {
        self.store.is_available()
    }

    /// Loads venues merged with the default set.
    ///
    /// Defaults come first in id order, followed by every stored venue whose
    /// id is not a default id, in stored order. When the merged list differs
    /// from what was stored it is written back. A detached store yields an
    /// empty list.
    pub fn load_venues(&self) -> RepoResult<Vec<Venue>> {
        if !self.store.is_available() {
            return Ok(Vec::new());
        }

        let stored: Vec<Venue> = self.load_collection(CollectionKind::Venues)?;
        let merged = merge_default_venues(&stored);
        if merged != stored {
            self.save_collection(CollectionKind::Venues, &merged)?;
            info!(
                "event=venues_heal module=repo status=ok stored_count={} merged_count={}",
                stored.len(),
                merged.len()
            );
        }
        Ok(merged)
    }

    /// Appends a venue with a generated id and returns it.
    ///
    /// Name checks belong to the caller.
    pub fn add_venue(&self, name: impl Into<String>) -> RepoResult<Venue> {
        let mut venues = self.load_venues()?;
        let venue = Venue::new(new_venue_id(), name);
        venues.push(venue.clone());
        self.save_collection(CollectionKind::Venues, &venues)?;
        Ok(venue)
    }

    /// Loads all events in stored order.
    pub fn load_events(&self) -> RepoResult<Vec<Event>> {
        let events: Vec<Event> = self.load_collection(CollectionKind::Events)?;
        for event in &events {
            event.validate().map_err(|err| RepoError::Corrupt {
                key: CollectionKind::Events.key(),
                message: format!("event `{}`: {err}", event.id),
            })?;
        }
        Ok(events)
    }

    /// Loads the events displayed on `date`.
    pub fn events_for_date(&self, date: NaiveDate) -> RepoResult<Vec<Event>> {
        let mut events = self.load_events()?;
        events.retain(|event| event.date == date);
        Ok(events)
    }

    /// Appends one event.
    ///
    /// Conflict detection is not performed here; see `service::conflict`.
    pub fn create_event(&self, event: &Event) -> RepoResult<()> {
        event.validate()?;

        let mut events = self.load_events()?;
        if events.iter().any(|existing| existing.id == event.id) {
            return Err(RepoError::DuplicateEvent(event.id.clone()));
        }
        events.push(event.clone());
        self.save_collection(CollectionKind::Events, &events)
    }

    /// Removes exactly the event with `id`, leaving the rest untouched.
    pub fn delete_event(&self, id: &str) -> RepoResult<Event> {
        let mut events = self.load_events()?;
        let index = events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;
        let removed = events.remove(index);
        self.save_collection(CollectionKind::Events, &events)?;
        Ok(removed)
    }

    /// Overwrites the whole venues collection.
    pub fn save_venues(&self, venues: &[Venue]) -> RepoResult<()> {
        self.save_collection(CollectionKind::Venues, venues)
    }

    /// Overwrites the whole events collection after re-checking each event.
    pub fn save_events(&self, events: &[Event]) -> RepoResult<()> {
        for event in events {
            event.validate()?;
        }
        self.save_collection(CollectionKind::Events, events)
    }

    /// Writes the example event when the events collection is empty.
    ///
    /// Returns whether an event was inserted. Idempotent; a detached store is
    /// never seeded.
    pub fn seed_events(&self, today: NaiveDate) -> RepoResult<bool> {
        if !self.store.is_available() || !self.load_events()?.is_empty() {
            return Ok(false);
        }

        self.create_event(&seed_event(today))?;
        info!("event=seed_events module=repo status=ok inserted=1");
        Ok(true)
    }

    fn load_collection<T: DeserializeOwned>(&self, kind: CollectionKind) -> RepoResult<Vec<T>> {
        if !self.store.is_available() {
            return Ok(Vec::new());
        }
        let Some(payload) = self.store.read(kind.key())? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&payload).map_err(|err| {
            warn!(
                "event=collection_decode module=repo status=error key={} error_code=storage_corrupt",
                kind.key()
            );
            RepoError::Corrupt {
                key: kind.key(),
                message: err.to_string(),
            }
        })
    }

    fn save_collection<T: Serialize>(&self, kind: CollectionKind, items: &[T]) -> RepoResult<()> {
        let payload = serde_json::to_string(items).map_err(|err| RepoError::Corrupt {
            key: kind.key(),
            message: err.to_string(),
        })?;
        self.store.write(kind.key(), &payload)?;
        Ok(())
    }
}

/// Defaults first, then stored venues whose ids are not default ids.
pub fn merge_default_venues(stored: &[Venue]) -> Vec<Venue> {
    let mut merged = default_venues();
    let default_ids: HashSet<String> = merged.iter().map(|venue| venue.id.clone()).collect();
    merged.extend(
        stored
            .iter()
            .filter(|venue| !default_ids.contains(&venue.id))
            .cloned(),
    );
    merged
}

/// Example event: "Morning Standup", 10:00-11:30 in venues 1 and 2.
pub fn seed_event(today: NaiveDate) -> Event {
    Event {
        id: SEED_EVENT_ID.to_string(),
        name: "Morning Standup".to_string(),
        description: "Daily team sync".to_string(),
        date: today,
        start_time: ClockTime::from_minutes_unchecked(10 * 60),
        end_time: ClockTime::from_minutes_unchecked(11 * 60 + 30),
        venue_ids: vec!["venue-1".to_string(), "venue-2".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::{merge_default_venues, seed_event};
    use crate::model::venue::Venue;
    use chrono::NaiveDate;

    #[test]
    fn merge_keeps_defaults_first_and_appends_custom_venues() {
        let stored = vec![
            Venue::new("venue-3", "Renamed"),
            Venue::new("venue-abc", "Room A"),
        ];
        let merged = merge_default_venues(&stored);

        assert_eq!(merged.len(), 6);
        assert_eq!(merged[2], Venue::new("venue-3", "Venue 3"));
        assert_eq!(merged[5], Venue::new("venue-abc", "Room A"));
    }

    #[test]
    fn seed_event_is_valid() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let event = seed_event(today);
        event.validate().unwrap();
        assert_eq!(event.window().unwrap().duration_minutes(), 90);
    }
}
