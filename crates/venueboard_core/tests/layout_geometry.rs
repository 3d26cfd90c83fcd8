use chrono::NaiveDate;
use venueboard_core::layout::{layout_day, scroll_offset_px, time_slot_labels, SLOTS_PER_DAY};
use venueboard_core::{
    current_time_indicator_offset, event_horizontal_span, event_vertical_span,
    time_to_slot_offset, ClockTime, Event, GridMetrics, HorizontalSpan, Venue, VerticalSpan,
};

fn t(value: &str) -> ClockTime {
    value.parse().unwrap()
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn event(id: &str, start: &str, end: &str, venues: &[&str]) -> Event {
    Event {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        date: date(),
        start_time: t(start),
        end_time: t(end),
        venue_ids: venues.iter().map(|id| id.to_string()).collect(),
    }
}

fn three_venues() -> Vec<Venue> {
    vec![
        Venue::new("v1", "V1"),
        Venue::new("v2", "V2"),
        Venue::new("v3", "V3"),
    ]
}

#[test]
fn slot_offset_floors_to_quarter_hours() {
    assert_eq!(time_to_slot_offset(t("00:00")), 0);
    assert_eq!(time_to_slot_offset(t("00:14")), 0);
    assert_eq!(time_to_slot_offset(t("10:15")), 41);
    assert_eq!(time_to_slot_offset(t("23:59")), 95);
}

#[test]
fn ten_to_eleven_thirty_spans_six_slots_below_header() {
    let metrics = GridMetrics {
        slot_height_px: 50.0,
        header_height_px: 40.0,
    };
    let span = event_vertical_span(&event("evt", "10:00", "11:30", &["v1"]), metrics).unwrap();

    assert_eq!(
        span,
        VerticalSpan {
            top: 2040.0,
            height: 300.0
        }
    );
}

#[test]
fn off_grid_times_render_proportionally() {
    let metrics = GridMetrics {
        slot_height_px: 30.0,
        header_height_px: 0.0,
    };
    let span = event_vertical_span(&event("evt", "00:05", "00:10", &["v1"]), metrics).unwrap();

    assert!((span.top - 10.0).abs() < 1e-9);
    assert!((span.height - 10.0).abs() < 1e-9);
}

#[test]
fn bridging_span_covers_unbooked_middle_venue() {
    let span = event_horizontal_span(&event("evt", "09:00", "10:00", &["v1", "v3"]), &three_venues())
        .unwrap();

    assert_eq!(
        span,
        HorizontalSpan {
            first_column: 0,
            last_column: 2
        }
    );
    assert_eq!(span.column_count(), 3);
    assert_eq!(span.grid_column_start(), 1);
    assert_eq!(span.grid_column_end(), 4);
}

#[test]
fn horizontal_span_ignores_order_of_selection_and_unknown_ids() {
    let span = event_horizontal_span(
        &event("evt", "09:00", "10:00", &["v3", "gone", "v2"]),
        &three_venues(),
    )
    .unwrap();
    assert_eq!(span.first_column, 1);
    assert_eq!(span.last_column, 2);

    let single = event_horizontal_span(&event("evt", "09:00", "10:00", &["v2"]), &three_venues())
        .unwrap();
    assert_eq!(single.column_count(), 1);
}

#[test]
fn event_with_no_displayed_venue_is_not_rendered() {
    let orphan = event("evt", "09:00", "10:00", &["gone"]);
    assert!(event_horizontal_span(&orphan, &three_venues()).is_none());

    let layout = layout_day(date(), &three_venues(), &[orphan], GridMetrics::default());
    assert!(layout.placements.is_empty());
    assert_eq!(layout.columns.len(), 3);
}

#[test]
fn layout_day_keeps_only_events_on_that_date() {
    let mut tomorrow = event("evt-tomorrow", "09:00", "10:00", &["v1"]);
    tomorrow.date = date().succ_opt().unwrap();
    let events = vec![event("evt-today", "09:00", "10:00", &["v1", "v2"]), tomorrow];

    let layout = layout_day(date(), &three_venues(), &events, GridMetrics::default());

    assert_eq!(layout.placements.len(), 1);
    let placement = &layout.placements[0];
    assert_eq!(placement.event.id, "evt-today");
    assert_eq!(placement.vertical.top, 36.0 * 50.0 + 40.0);
    assert_eq!(placement.horizontal.last_column, 1);
}

#[test]
fn now_indicator_and_scroll_offset() {
    let metrics = GridMetrics::default();
    assert_eq!(current_time_indicator_offset(t("10:00"), metrics), 2040.0);
    assert!((current_time_indicator_offset(t("10:03"), metrics) - 2050.0).abs() < 1e-9);
    assert_eq!(scroll_offset_px(t("10:03"), metrics), 2000.0);
}

#[test]
fn sidebar_has_ninety_six_quarter_hour_labels() {
    let labels = time_slot_labels();
    assert_eq!(labels.len(), usize::from(SLOTS_PER_DAY));
    assert_eq!(labels[0], "00:00");
    assert_eq!(labels[1], "00:15");
    assert_eq!(labels[95], "23:45");
}
