//! Board use-case service.
//!
//! # Responsibility
//! - Run the create-event pipeline: validate, check conflicts, persist.
//! - Keep an explicit snapshot of venues and events for rendering, refreshed
//!   from storage after every mutation.
//!
//! # Invariants
//! - A rejected operation leaves both storage and snapshot unchanged.
//! - The snapshot never holds state that was not read back from storage.

use crate::calendar::week::{DayCell, ViewState};
use crate::layout::{layout_day, DayLayout, GridMetrics};
use crate::model::event::{new_event_id, Event, EventDraft, ValidationError};
use crate::model::venue::{Venue, VenueId};
use crate::repo::board_repo::{BoardRepository, RepoError};
use crate::service::conflict::{find_conflict, Conflict};
use crate::store::{KeyValueStore, StoreError};
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for board use-cases.
#[derive(Debug)]
pub enum BoardError {
    /// Venue name is empty after trimming.
    BlankVenueName,
    Validation(ValidationError),
    /// Selected venue is not on the board.
    UnknownVenue(VenueId),
    /// Candidate overlaps an existing booking. `message` is ready to show.
    Conflict { conflict: Conflict, message: String },
    Repo(RepoError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankVenueName => write!(f, "venue name cannot be blank"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::UnknownVenue(id) => write!(f, "venue not found: {id}"),
            Self::Conflict { message, .. } => write!(f, "{message}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::BlankVenueName | Self::UnknownVenue(_) | Self::Conflict { .. } => None,
        }
    }
}

impl From<ValidationError> for BoardError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for BoardError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Rendering copy of persisted board state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Venue columns in display order.
    pub venues: Vec<Venue>,
    /// All events in stored order.
    pub events: Vec<Event>,
}

/// Board facade over a repository and its snapshot.
pub struct BoardService<S: KeyValueStore> {
    repo: BoardRepository<S>,
    snapshot: BoardSnapshot,
}

impl<S: KeyValueStore> BoardService<S> {
    /// Seeds the example event if the board is empty, then loads the
    /// snapshot. Call once when the board is first shown.
    pub fn bootstrap(store: S, today: NaiveDate) -> Result<Self, BoardError> {
        BoardRepository::new(&store).seed_events(today)?;
        Self::open(store)
    }

    /// Loads the snapshot without seeding.
    pub fn open(store: S) -> Result<Self, BoardError> {
        let mut service = Self {
            repo: BoardRepository::new(store),
            snapshot: BoardSnapshot::default(),
        };
        service.refresh()?;
        if !service.repo.is_writable() {
            warn!("event=board_open module=service status=degraded reason=storage_unavailable");
        }
        Ok(service)
    }

    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    pub fn repository(&self) -> &BoardRepository<S> {
        &self.repo
    }

    /// Re-reads venues and events from storage.
    pub fn refresh(&mut self) -> Result<(), BoardError> {
        self.snapshot = BoardSnapshot {
            venues: self.repo.load_venues()?,
            events: self.repo.load_events()?,
        };
        Ok(())
    }

    /// Adds a venue column. Names that are blank after trimming are rejected.
    pub fn add_venue(&mut self, name: &str) -> Result<Venue, BoardError> {
        if name.trim().is_empty() {
            return Err(BoardError::BlankVenueName);
        }
        let venue = self.repo.add_venue(name)?;
        self.refresh()?;
        info!(
            "event=venue_add module=service status=ok venue_id={} venue_count={}",
            venue.id,
            self.snapshot.venues.len()
        );
        Ok(venue)
    }

    /// Validates, conflict-checks and persists a new event.
    ///
    /// Every selected venue must exist on the board. Conflicts are checked
    /// against freshly loaded events, not the snapshot.
    pub fn create_event(&mut self, draft: &EventDraft) -> Result<Event, BoardError> {
        let candidate = draft.validate().map_err(|err| {
            info!("event=event_create module=service status=rejected reason=validation");
            err
        })?;
        if !self.repo.is_writable() {
            return Err(RepoError::Store(StoreError::Unavailable).into());
        }

        let venues = self.repo.load_venues()?;
        if let Some(unknown) = candidate
            .venue_ids
            .iter()
            .find(|id| !venues.iter().any(|venue| &venue.id == *id))
        {
            info!(
                "event=event_create module=service status=rejected reason=unknown_venue venue_id={unknown}"
            );
            return Err(BoardError::UnknownVenue(unknown.clone()));
        }

        let existing = self.repo.load_events()?;
        if let Some(conflict) = find_conflict(&candidate, &existing) {
            info!(
                "event=event_create module=service status=rejected reason=conflict blocking_event_id={} venue_id={}",
                conflict.event.id, conflict.venue_id
            );
            let message = conflict.describe(&venues);
            return Err(BoardError::Conflict { conflict, message });
        }

        let event = candidate.into_event(new_event_id());
        self.repo.create_event(&event)?;
        self.refresh()?;
        info!(
            "event=event_create module=service status=ok event_id={} date={} venue_count={}",
            event.id,
            event.date,
            event.venue_ids.len()
        );
        Ok(event)
    }

    /// Deletes one event by id and returns it.
    pub fn delete_event(&mut self, id: &str) -> Result<Event, BoardError> {
        let removed = self.repo.delete_event(id)?;
        self.refresh()?;
        info!("event=event_delete module=service status=ok event_id={id}");
        Ok(removed)
    }

    /// Events dated on `date`, in stored order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.snapshot
            .events
            .iter()
            .filter(|event| event.date == date)
            .collect()
    }

    /// Grid geometry for `date` against the current venue order.
    pub fn day_layout(&self, date: NaiveDate, metrics: GridMetrics) -> DayLayout {
        layout_day(date, &self.snapshot.venues, &self.snapshot.events, metrics)
    }

    /// Header cells for the week shown by `view`.
    pub fn week_strip(&self, view: &ViewState, today: NaiveDate) -> Vec<DayCell> {
        view.week_strip(&self.snapshot.events, today)
    }
}
