//! Week navigation for the date header.

pub mod week;

pub use week::{event_count, start_of_week, week_days, DayCell, ViewState, WeekDirection};
