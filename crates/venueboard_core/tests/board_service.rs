use chrono::NaiveDate;
use venueboard_core::db::open_db_in_memory;
use venueboard_core::{
    BoardError, BoardService, DetachedStore, EventDraft, GridMetrics, MemoryStore, RepoError,
    SqliteStore, StoreError, ValidationError, ViewState, WeekDirection,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn draft(name: &str, start: &str, end: &str, venue_ids: &[&str]) -> EventDraft {
    EventDraft {
        name: name.to_string(),
        description: String::new(),
        date: "2026-10-20".to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        venue_ids: venue_ids.iter().map(|id| id.to_string()).collect(),
    }
}

#[test]
fn bootstrap_seeds_once_and_loads_snapshot() {
    let store = MemoryStore::new();
    let service = BoardService::bootstrap(&store, today()).unwrap();
    assert_eq!(service.snapshot().venues.len(), 5);
    assert_eq!(service.snapshot().events.len(), 1);
    drop(service);

    let reopened = BoardService::bootstrap(&store, today()).unwrap();
    assert_eq!(reopened.snapshot().events.len(), 1);
    assert_eq!(reopened.events_on(today()).len(), 1);
}

#[test]
fn add_venue_then_create_event_in_it() {
    let conn = open_db_in_memory().unwrap();
    let mut service = BoardService::bootstrap(SqliteStore::new(&conn), today()).unwrap();
    let seeded = service.snapshot().events[0].id.clone();
    service.delete_event(&seeded).unwrap();
    assert!(service.snapshot().events.is_empty());

    let room = service.add_venue("Room A").unwrap();
    let created = service
        .create_event(&draft("Sync", "09:00", "09:30", &[room.id.as_str()]))
        .unwrap();

    let events = service.repository().load_events().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0], created);
    assert_eq!(service.snapshot().events, events);
    assert_eq!(service.snapshot().venues.last(), Some(&room));
}

#[test]
fn open_loads_without_seeding() {
    let store = MemoryStore::new();
    let mut service = BoardService::bootstrap(&store, today()).unwrap();
    let seeded = service.snapshot().events[0].id.clone();
    service.delete_event(&seeded).unwrap();
    drop(service);

    let reopened = BoardService::open(&store).unwrap();
    assert_eq!(reopened.snapshot().venues.len(), 5);
    assert!(reopened.snapshot().events.is_empty());
    assert!(reopened.repository().load_events().unwrap().is_empty());
}

#[test]
fn event_in_unknown_venue_is_not_written() {
    let store = MemoryStore::new();
    let mut service = BoardService::bootstrap(&store, today()).unwrap();
    let before = service.snapshot().clone();

    let err = service
        .create_event(&draft("Ghost", "09:00", "10:00", &["venue-1", "venue-ghost"]))
        .unwrap_err();

    assert!(matches!(err, BoardError::UnknownVenue(id) if id == "venue-ghost"));
    assert_eq!(service.repository().load_events().unwrap(), before.events);
    assert_eq!(service.snapshot(), &before);
}

#[test]
fn repeated_venue_selection_is_stored_once() {
    let store = MemoryStore::new();
    let mut service = BoardService::bootstrap(&store, today()).unwrap();

    let created = service
        .create_event(&draft("Sync", "09:00", "09:30", &["venue-4", "venue-2", "venue-4"]))
        .unwrap();

    assert_eq!(created.venue_ids, vec!["venue-4", "venue-2"]);
}

#[test]
fn blank_venue_name_is_rejected() {
    let store = MemoryStore::new();
    let mut service = BoardService::bootstrap(&store, today()).unwrap();

    let err = service.add_venue("   ").unwrap_err();
    assert!(matches!(err, BoardError::BlankVenueName));
    assert_eq!(service.snapshot().venues.len(), 5);
}

#[test]
fn validation_failure_leaves_board_unchanged() {
    let store = MemoryStore::new();
    let mut service = BoardService::bootstrap(&store, today()).unwrap();
    let before = service.snapshot().clone();

    let err = service
        .create_event(&draft("Late", "18:00", "17:00", &["venue-1"]))
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::Validation(ValidationError::InvalidTimeRange { .. })
    ));

    let err = service
        .create_event(&draft("Nowhere", "09:00", "10:00", &[]))
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::Validation(ValidationError::NoVenueSelected)
    ));

    assert_eq!(service.snapshot(), &before);
}

#[test]
fn conflicting_event_is_rejected_with_message() {
    let store = MemoryStore::new();
    let mut service = BoardService::bootstrap(&store, today()).unwrap();
    service
        .create_event(&draft("Keynote", "10:00", "11:30", &["venue-3"]))
        .unwrap();

    let err = service
        .create_event(&draft("Workshop", "11:00", "12:00", &["venue-2", "venue-3"]))
        .unwrap_err();

    match err {
        BoardError::Conflict { conflict, message } => {
            assert_eq!(conflict.venue_id, "venue-3");
            assert_eq!(conflict.event.name, "Keynote");
            assert!(message.contains("\"Keynote\" is already scheduled in Venue 3"));
            assert!(message.contains("(10:00 - 11:30)"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(service.events_on(today().succ_opt().unwrap()).len(), 1);

    // Back-to-back booking in the same venue is fine.
    service
        .create_event(&draft("Workshop", "11:30", "12:30", &["venue-3"]))
        .unwrap();
}

#[test]
fn delete_unknown_event_reports_not_found() {
    let store = MemoryStore::new();
    let mut service = BoardService::bootstrap(&store, today()).unwrap();

    let err = service.delete_event("evt-missing").unwrap_err();
    assert!(matches!(err, BoardError::Repo(RepoError::NotFound(_))));
    assert_eq!(service.snapshot().events.len(), 1);
}

#[test]
fn day_layout_places_seeded_event_across_two_columns() {
    let store = MemoryStore::new();
    let service = BoardService::bootstrap(&store, today()).unwrap();

    let layout = service.day_layout(today(), GridMetrics::default());

    assert_eq!(layout.columns.len(), 5);
    assert_eq!(layout.placements.len(), 1);
    let placement = &layout.placements[0];
    assert_eq!(placement.vertical.top, 2040.0);
    assert_eq!(placement.vertical.height, 300.0);
    assert_eq!(placement.horizontal.first_column, 0);
    assert_eq!(placement.horizontal.last_column, 1);
}

#[test]
fn week_strip_counts_events_per_day() {
    let store = MemoryStore::new();
    let mut service = BoardService::bootstrap(&store, today()).unwrap();
    service
        .create_event(&draft("Sync", "09:00", "09:30", &["venue-1"]))
        .unwrap();

    let mut view = ViewState::new(today());
    let strip = service.week_strip(&view, today());
    assert_eq!(strip.len(), 7);
    assert_eq!(strip[0].date, today());
    assert!(strip[0].is_today && strip[0].is_selected);
    assert_eq!(strip[0].event_count, 1);
    assert_eq!(strip[1].event_count, 1);
    assert_eq!(strip[2].event_count, 0);

    view.shift_week(WeekDirection::Next);
    let next = service.week_strip(&view, today());
    assert!(next.iter().all(|cell| cell.event_count == 0 && !cell.is_today));
}

#[test]
fn detached_board_is_read_only() {
    let mut service = BoardService::bootstrap(DetachedStore, today()).unwrap();

    assert!(service.snapshot().venues.is_empty());
    assert!(service.snapshot().events.is_empty());

    let err = service
        .create_event(&draft("Sync", "09:00", "09:30", &["venue-1"]))
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::Repo(RepoError::Store(StoreError::Unavailable))
    ));
}
