//! Day-grid geometry.
//!
//! # Responsibility
//! - Map times of day to 15-minute slots and pixel offsets.
//! - Map an event's venues to a contiguous column span.
//!
//! # Invariants
//! - A day has exactly `SLOTS_PER_DAY` slots of `SLOT_MINUTES` each.
//! - Vertical offsets are proportional; times off the 15-minute grid produce
//!   fractional slot positions and are never rounded.
//! - Horizontal spans bridge every column between the first and last booked
//!   venue, booked or not.

use crate::model::clock::{ClockTime, TimeWindow};
use crate::model::event::Event;
use crate::model::venue::Venue;
use std::time::Duration;

pub mod day;

pub use day::{layout_day, DayLayout, EventPlacement};

/// Minutes covered by one grid slot.
pub const SLOT_MINUTES: u16 = 15;
/// Number of slots in a day.
pub const SLOTS_PER_DAY: u16 = 24 * 60 / SLOT_MINUTES;
/// How often hosts should recompute the current-time indicator.
pub const NOW_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Pixel dimensions of the day grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Height of one 15-minute slot.
    pub slot_height_px: f64,
    /// Height of the sticky venue header above the first slot.
    pub header_height_px: f64,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            slot_height_px: 50.0,
            header_height_px: 40.0,
        }
    }
}

/// Vertical placement of an event card, in pixels from the grid top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalSpan {
    pub top: f64,
    pub height: f64,
}

/// Inclusive range of zero-based venue columns an event card covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalSpan {
    pub first_column: usize,
    pub last_column: usize,
}

impl HorizontalSpan {
    pub fn column_count(self) -> usize {
        self.last_column - self.first_column + 1
    }

    /// One-based CSS `grid-column-start`.
    pub fn grid_column_start(self) -> usize {
        self.first_column + 1
    }

    /// One-based, exclusive CSS `grid-column-end`.
    pub fn grid_column_end(self) -> usize {
        self.last_column + 2
    }
}

/// Index of the slot containing `time`: `hour * 4 + minute / 15`.
pub fn time_to_slot_offset(time: ClockTime) -> u16 {
    time.hour() * (60 / SLOT_MINUTES) + time.minute() / SLOT_MINUTES
}

/// Pixel offset of `time` from the grid top, header included.
pub fn time_to_offset_px(time: ClockTime, metrics: GridMetrics) -> f64 {
    slots(time.minutes()) * metrics.slot_height_px + metrics.header_height_px
}

/// Card position for a time window.
pub fn vertical_span(window: TimeWindow, metrics: GridMetrics) -> VerticalSpan {
    VerticalSpan {
        top: time_to_offset_px(window.start(), metrics),
        height: slots(window.duration_minutes()) * metrics.slot_height_px,
    }
}

/// Card position for an event; `None` if its stored range is empty.
pub fn event_vertical_span(event: &Event, metrics: GridMetrics) -> Option<VerticalSpan> {
    event.window().map(|window| vertical_span(window, metrics))
}

/// Column span of an event within the displayed venue order.
///
/// Venue ids missing from `venue_order` are ignored; `None` means no booked
/// venue is displayed and the event is not rendered.
pub fn event_horizontal_span(event: &Event, venue_order: &[Venue]) -> Option<HorizontalSpan> {
    let mut columns = event
        .venue_ids
        .iter()
        .filter_map(|id| venue_order.iter().position(|venue| &venue.id == id));

    let first = columns.next()?;
    let (first_column, last_column) =
        columns.fold((first, first), |(lo, hi), column| (lo.min(column), hi.max(column)));
    Some(HorizontalSpan {
        first_column,
        last_column,
    })
}

/// Offset of the "now" line; same formula as an event's `top`.
pub fn current_time_indicator_offset(now: ClockTime, metrics: GridMetrics) -> f64 {
    time_to_offset_px(now, metrics)
}

/// Scroll position that brings the slot containing `now` to the top.
pub fn scroll_offset_px(now: ClockTime, metrics: GridMetrics) -> f64 {
    f64::from(time_to_slot_offset(now)) * metrics.slot_height_px
}

/// Sidebar labels `00:00`, `00:15`, ... `23:45`.
pub fn time_slot_labels() -> Vec<String> {
    (0..SLOTS_PER_DAY)
        .filter_map(|slot| ClockTime::from_minutes(slot * SLOT_MINUTES))
        .map(|time| time.to_string())
        .collect()
}

fn slots(minutes: u16) -> f64 {
    f64::from(minutes) / f64::from(SLOT_MINUTES)
}
