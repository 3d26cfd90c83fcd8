//! Core domain logic for VenueBoard.
//! This crate is the single source of truth for scheduling invariants.

pub mod calendar;
pub mod config;
pub mod db;
pub mod layout;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use calendar::{DayCell, ViewState, WeekDirection};
pub use config::BoardConfig;
pub use layout::{
    current_time_indicator_offset, event_horizontal_span, event_vertical_span,
    time_to_slot_offset, DayLayout, EventPlacement, GridMetrics, HorizontalSpan, VerticalSpan,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::clock::{ClockTime, ClockTimeError, TimeWindow};
pub use model::event::{Event, EventDraft, EventId, NewEvent, ValidationError};
pub use model::venue::{default_venues, Venue, VenueId};
pub use repo::board_repo::{BoardRepository, RepoError, RepoResult};
pub use service::board_service::{BoardError, BoardService, BoardSnapshot};
pub use service::conflict::{find_conflict, Conflict};
pub use store::{
    CollectionKind, DetachedStore, KeyValueStore, MemoryStore, SqliteStore, StoreError,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
