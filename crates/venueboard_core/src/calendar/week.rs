//! Monday-start week strip and view navigation state.
//!
//! # Invariants
//! - Weeks start on Monday; a Sunday belongs to the week of the Monday
//!   before it.
//! - Navigating weeks moves only the view date; the selected day stays put
//!   until the user picks another one.

use crate::model::event::Event;
use chrono::{Datelike, Days, NaiveDate};

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekDirection {
    Previous,
    Next,
}

/// One cell of the week header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Events dated on this day.
    pub event_count: usize,
    pub is_today: bool,
    pub is_selected: bool,
}

/// Which day is shown in the grid and which week is shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Day whose events are laid out on the grid.
    pub selected_date: NaiveDate,
    /// Any day inside the week shown in the header.
    pub view_date: NaiveDate,
}

impl ViewState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected_date: today,
            view_date: today,
        }
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Moves the header one week back or forward.
    ///
    /// Leaves the state unchanged at the edges of the representable range.
    pub fn shift_week(&mut self, direction: WeekDirection) {
        let week = Days::new(DAYS_PER_WEEK as u64);
        let shifted = match direction {
            WeekDirection::Previous => self.view_date.checked_sub_days(week),
            WeekDirection::Next => self.view_date.checked_add_days(week),
        };
        if let Some(date) = shifted {
            self.view_date = date;
        }
    }

    /// Resets both the selected day and the header week to `today`.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// Header cells for the viewed week.
    pub fn week_strip(&self, events: &[Event], today: NaiveDate) -> Vec<DayCell> {
        week_days(self.view_date)
            .into_iter()
            .map(|date| DayCell {
                date,
                event_count: event_count(events, date),
                is_today: date == today,
                is_selected: date == self.selected_date,
            })
            .collect()
    }
}

/// Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let back = Days::new(u64::from(date.weekday().num_days_from_monday()));
    date.checked_sub_days(back).unwrap_or(date)
}

/// The seven days, Monday first, of the week containing `date`.
pub fn week_days(date: NaiveDate) -> Vec<NaiveDate> {
    start_of_week(date)
        .iter_days()
        .take(DAYS_PER_WEEK)
        .collect()
}

pub fn event_count(events: &[Event], date: NaiveDate) -> usize {
    events.iter().filter(|event| event.date == date).count()
}

#[cfg(test)]
mod tests {
    use super::{start_of_week, week_days, ViewState, WeekDirection};
    use chrono::{Datelike, NaiveDate, Weekday};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn sunday_belongs_to_previous_monday() {
        // 2026-10-25 is a Sunday.
        assert_eq!(start_of_week(d(2026, 10, 25)), d(2026, 10, 19));
        assert_eq!(start_of_week(d(2026, 10, 19)), d(2026, 10, 19));
    }

    #[test]
    fn week_days_run_monday_to_sunday() {
        let days = week_days(d(2026, 10, 22));
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert_eq!(days[6], d(2026, 10, 25));
    }

    #[test]
    fn shifting_weeks_keeps_selection() {
        let today = d(2026, 10, 19);
        let mut view = ViewState::new(today);
        view.shift_week(WeekDirection::Next);
        assert_eq!(view.view_date, d(2026, 10, 26));
        assert_eq!(view.selected_date, today);

        view.shift_week(WeekDirection::Previous);
        view.shift_week(WeekDirection::Previous);
        assert_eq!(view.view_date, d(2026, 10, 12));

        view.go_to_today(today);
        assert_eq!(view, ViewState::new(today));
    }
}
