//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level board functions to the UI host via FRB.
//! - Flatten core results into plain envelopes with a human-readable message.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call opens the configured board, so no state is cached here
//!   besides the resolved database path.
//! - Only `board_open` seeds the example event.
//! - Read calls report storage failures through `ok` and `message`; they
//!   never answer with an empty board instead.

use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use venueboard_core::db::open_db;
use venueboard_core::layout::current_time_indicator_offset;
use venueboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BoardConfig, BoardService, ClockTime, EventDraft, EventPlacement, GridMetrics, SqliteStore,
    Venue, ViewState,
};

static BOARD_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Venue column as shown in the grid header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueItem {
    pub venue_id: String,
    pub name: String,
}

/// One positioned event card.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCardItem {
    pub event_id: String,
    pub name: String,
    pub description: String,
    /// `HH:MM - HH:MM`.
    pub time_label: String,
    pub top_px: f64,
    pub height_px: f64,
    /// One-based, inclusive.
    pub grid_column_start: u32,
    /// One-based, exclusive.
    pub grid_column_end: u32,
}

/// Everything needed to draw one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayViewResponse {
    pub ok: bool,
    pub columns: Vec<VenueItem>,
    pub cards: Vec<EventCardItem>,
    /// Current-time line offset for the local clock.
    pub now_offset_px: f64,
    pub message: String,
}

/// Venue column listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueListResponse {
    pub ok: bool,
    pub venues: Vec<VenueItem>,
    pub message: String,
}

/// Week header for one Monday-start week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekStripResponse {
    pub ok: bool,
    pub cells: Vec<DayCellItem>,
    pub message: String,
}

/// Week header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCellItem {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub event_count: u32,
    pub is_today: bool,
    pub is_selected: bool,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Created or deleted entity id.
    pub id: Option<String>,
    /// Message suitable for an alert on failure.
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, id: String) -> Self {
        Self {
            ok: true,
            id: Some(id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Opens the configured board, seeding the example event when it has none.
///
/// # FFI contract
/// - Call once when the board is first shown.
/// - Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn board_open() -> String {
    open_board_at(&resolve_board_db_path(), Local::now().date_naive())
}

/// Lists venue columns in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn board_list_venues() -> VenueListResponse {
    list_venues_at(&resolve_board_db_path())
}

/// Adds a venue column.
#[flutter_rust_bridge::frb(sync)]
pub fn board_add_venue(name: String) -> BoardActionResponse {
    match with_board(|service| service.add_venue(&name).map_err(|err| err.to_string())) {
        Ok(venue) => BoardActionResponse::success("Venue added.", venue.id),
        Err(err) => BoardActionResponse::failure(err),
    }
}

/// Creates an event after validation and conflict checks.
///
/// # FFI contract
/// - On conflict, `message` names the blocking event, venue and window.
/// - Nothing is written when `ok` is false.
#[flutter_rust_bridge::frb(sync)]
pub fn board_create_event(
    name: String,
    description: String,
    date: String,
    start_time: String,
    end_time: String,
    venue_ids: Vec<String>,
) -> BoardActionResponse {
    let draft = EventDraft {
        name,
        description,
        date,
        start_time,
        end_time,
        venue_ids,
    };
    match with_board(|service| service.create_event(&draft).map_err(|err| err.to_string())) {
        Ok(event) => BoardActionResponse::success("Event created.", event.id),
        Err(err) => BoardActionResponse::failure(err),
    }
}

/// Deletes one event by id.
#[flutter_rust_bridge::frb(sync)]
pub fn board_delete_event(event_id: String) -> BoardActionResponse {
    match with_board(|service| {
        service
            .delete_event(&event_id)
            .map_err(|err| err.to_string())
    }) {
        Ok(event) => BoardActionResponse::success("Event deleted.", event.id),
        Err(err) => BoardActionResponse::failure(err),
    }
}

/// Lays out the events of `date` (`YYYY-MM-DD`) with default grid metrics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_day_view(date: String) -> DayViewResponse {
    let metrics = GridMetrics::default();
    let now_offset_px =
        current_time_indicator_offset(ClockTime::from_naive(Local::now().time()), metrics);
    let result = parse_date(&date).and_then(|day| {
        with_board(|service| Ok(service.day_layout(day, metrics)))
    });

    match result {
        Ok(layout) => DayViewResponse {
            ok: true,
            columns: layout.columns.iter().map(to_venue_item).collect(),
            cards: layout.placements.iter().map(to_event_card).collect(),
            now_offset_px,
            message: format!("{} event(s).", layout.placements.len()),
        },
        Err(err) => DayViewResponse {
            ok: false,
            columns: Vec::new(),
            cards: Vec::new(),
            now_offset_px,
            message: format!("board_day_view failed: {err}"),
        },
    }
}

/// Week header for the week containing `view_date`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_week_strip(view_date: String, selected_date: String) -> WeekStripResponse {
    week_strip_at(
        &resolve_board_db_path(),
        &view_date,
        &selected_date,
        Local::now().date_naive(),
    )
}

fn open_board_at(path: &Path, today: NaiveDate) -> String {
    match open_db(path) {
        Ok(conn) => match BoardService::bootstrap(SqliteStore::new(&conn), today) {
            Ok(_) => String::new(),
            Err(err) => format!("board_open failed: {err}"),
        },
        Err(err) => format!("board_open failed: {err}"),
    }
}

fn list_venues_at(path: &Path) -> VenueListResponse {
    match with_board_at(path, |service| {
        Ok(service.snapshot().venues.iter().map(to_venue_item).collect::<Vec<_>>())
    }) {
        Ok(venues) => VenueListResponse {
            ok: true,
            message: format!("{} venue(s).", venues.len()),
            venues,
        },
        Err(err) => VenueListResponse {
            ok: false,
            venues: Vec::new(),
            message: format!("board_list_venues failed: {err}"),
        },
    }
}

fn week_strip_at(
    path: &Path,
    view_date: &str,
    selected_date: &str,
    today: NaiveDate,
) -> WeekStripResponse {
    let result = parse_date(view_date)
        .and_then(|view_date| {
            parse_date(selected_date).map(|selected_date| ViewState {
                selected_date,
                view_date,
            })
        })
        .and_then(|view| {
            with_board_at(path, |service| Ok(service.week_strip(&view, today)))
        });

    match result {
        Ok(strip) => WeekStripResponse {
            ok: true,
            cells: strip
                .into_iter()
                .map(|cell| DayCellItem {
                    date: cell.date.to_string(),
                    event_count: u32::try_from(cell.event_count).unwrap_or(u32::MAX),
                    is_today: cell.is_today,
                    is_selected: cell.is_selected,
                })
                .collect(),
            message: String::new(),
        },
        Err(err) => WeekStripResponse {
            ok: false,
            cells: Vec::new(),
            message: format!("board_week_strip failed: {err}"),
        },
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("expected YYYY-MM-DD date, got `{value}`"))
}

fn resolve_board_db_path() -> PathBuf {
    BOARD_DB_PATH
        .get_or_init(|| BoardConfig::from_env().db_path)
        .clone()
}

fn with_board<T>(
    f: impl FnOnce(&mut BoardService<SqliteStore<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    with_board_at(&resolve_board_db_path(), f)
}

fn with_board_at<T>(
    path: &Path,
    f: impl FnOnce(&mut BoardService<SqliteStore<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let conn = open_db(path).map_err(|err| format!("board DB open failed: {err}"))?;
    let mut service = BoardService::open(SqliteStore::new(&conn))
        .map_err(|err| format!("board load failed: {err}"))?;
    f(&mut service)
}

fn to_venue_item(venue: &Venue) -> VenueItem {
    VenueItem {
        venue_id: venue.id.clone(),
        name: venue.name.clone(),
    }
}

fn to_event_card(placement: &EventPlacement) -> EventCardItem {
    let event = &placement.event;
    EventCardItem {
        event_id: event.id.clone(),
        name: event.name.clone(),
        description: event.description.clone(),
        time_label: format!("{} - {}", event.start_time, event.end_time),
        top_px: placement.vertical.top,
        height_px: placement.vertical.height,
        grid_column_start: column_u32(placement.horizontal.grid_column_start()),
        grid_column_end: column_u32(placement.horizontal.grid_column_end()),
    }
}

fn column_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
