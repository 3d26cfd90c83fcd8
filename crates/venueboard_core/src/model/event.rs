//! Event domain model and input validation.
//!
//! # Responsibility
//! - Define the persisted event record and the typed creation request.
//! - Validate raw form input into a `NewEvent` before conflict checks.
//!
//! # Invariants
//! - `start_time < end_time` for every persisted event.
//! - `venue_ids` is never empty.
//! - `date` is the display day; events never cross midnight.

use crate::model::clock::{ClockTime, ClockTimeError, TimeWindow};
use crate::model::venue::VenueId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable event identifier.
pub type EventId = String;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Persisted event record.
///
/// Wire field names follow the stored collection shape
/// (`startTime`, `endTime`, `venueIds`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    /// Free text; may be empty.
    #[serde(default)]
    pub description: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    /// Booked venues in selection order.
    pub venue_ids: Vec<VenueId>,
}

impl Event {
    /// Returns the occupied time window, or `None` when the stored range is
    /// empty or reversed.
    pub fn window(&self) -> Option<TimeWindow> {
        TimeWindow::new(self.start_time, self.end_time)
    }

    pub fn books_venue(&self, venue_id: &str) -> bool {
        self.venue_ids.iter().any(|id| id == venue_id)
    }

    /// Re-checks model invariants on an already-built record.
    ///
    /// Used on read paths so persisted data violating the model is rejected
    /// instead of rendered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.venue_ids.is_empty() {
            return Err(ValidationError::NoVenueSelected);
        }
        if self.window().is_none() {
            return Err(ValidationError::InvalidTimeRange {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }
}

/// Raw event creation input as collected from a form.
///
/// Every field is kept as entered; `validate` is the only way to turn it
/// into something the board will persist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub venue_ids: Vec<VenueId>,
}

/// Validated creation request, ready for conflict detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub window: TimeWindow,
    pub venue_ids: Vec<VenueId>,
}

impl NewEvent {
    /// Assigns an id and produces the persisted record.
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            name: self.name,
            description: self.description,
            date: self.date,
            start_time: self.window.start(),
            end_time: self.window.end(),
            venue_ids: self.venue_ids,
        }
    }
}

/// Validation failure for event input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty. Carries the wire field name.
    MissingField(&'static str),
    NoVenueSelected,
    InvalidDate(String),
    InvalidTime {
        field: &'static str,
        source: ClockTimeError,
    },
    /// End time is not after start time.
    InvalidTimeRange { start: ClockTime, end: ClockTime },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::NoVenueSelected => write!(f, "select at least one venue"),
            Self::InvalidDate(value) => write!(f, "expected YYYY-MM-DD date, got `{value}`"),
            Self::InvalidTime { field, source } => write!(f, "invalid `{field}`: {source}"),
            Self::InvalidTimeRange { start, end } => {
                write!(f, "end time {end} must be after start time {start}")
            }
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTime { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl EventDraft {
    /// Validates raw input.
    ///
    /// Rules run in order and stop at the first failure:
    /// 1. `name` non-empty.
    /// 2. `date`, `startTime`, `endTime` non-empty.
    /// 3. at least one venue selected.
    /// 4. date and times parse, and start is strictly before end.
    ///
    /// Repeated venue ids collapse to their first occurrence. Venue existence
    /// is not checked here.
    pub fn validate(&self) -> Result<NewEvent, ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        for (field, value) in [
            ("date", &self.date),
            ("startTime", &self.start_time),
            ("endTime", &self.end_time),
        ] {
            if value.is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        if self.venue_ids.is_empty() {
            return Err(ValidationError::NoVenueSelected);
        }

        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(self.date.clone()))?;
        let start = parse_time("startTime", &self.start_time)?;
        let end = parse_time("endTime", &self.end_time)?;
        let window =
            TimeWindow::new(start, end).ok_or(ValidationError::InvalidTimeRange { start, end })?;

        Ok(NewEvent {
            name: self.name.clone(),
            description: self.description.clone(),
            date,
            window,
            venue_ids: dedup_in_order(&self.venue_ids),
        })
    }
}

fn dedup_in_order(ids: &[VenueId]) -> Vec<VenueId> {
    let mut unique: Vec<VenueId> = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(id) {
            unique.push(id.clone());
        }
    }
    unique
}

fn parse_time(field: &'static str, value: &str) -> Result<ClockTime, ValidationError> {
    value
        .parse()
        .map_err(|source| ValidationError::InvalidTime { field, source })
}

/// Generates a fresh id for a newly created event.
pub fn new_event_id() -> EventId {
    format!("evt-{}", Uuid::new_v4().simple())
}
