//! Placement of one day's events on the venue grid.

use super::{event_horizontal_span, event_vertical_span, GridMetrics, HorizontalSpan, VerticalSpan};
use crate::model::event::Event;
use crate::model::venue::Venue;
use chrono::NaiveDate;

/// Geometry of one rendered event card.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPlacement {
    pub event: Event,
    pub vertical: VerticalSpan,
    pub horizontal: HorizontalSpan,
}

/// Everything a renderer needs to draw one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub date: NaiveDate,
    /// Venue columns in display order.
    pub columns: Vec<Venue>,
    /// Cards in event list order; events with no displayed venue are absent.
    pub placements: Vec<EventPlacement>,
}

/// Lays out every event dated `date` against the `venues` column order.
pub fn layout_day(
    date: NaiveDate,
    venues: &[Venue],
    events: &[Event],
    metrics: GridMetrics,
) -> DayLayout {
    let placements = events
        .iter()
        .filter(|event| event.date == date)
        .filter_map(|event| {
            Some(EventPlacement {
                vertical: event_vertical_span(event, metrics)?,
                horizontal: event_horizontal_span(event, venues)?,
                event: event.clone(),
            })
        })
        .collect();

    DayLayout {
        date,
        columns: venues.to_vec(),
        placements,
    }
}
