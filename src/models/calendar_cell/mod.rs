// Calendar cell model
// One square of the month grid

use chrono::{Datelike, NaiveDate};

use crate::models::day_key::DayKey;

/// A date in the month grid plus its display flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// False for padding days borrowed from the previous or next month
    pub is_in_displayed_month: bool,
    pub is_today: bool,
}

impl CalendarCell {
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    pub fn day_key(&self) -> DayKey {
        DayKey::from(self.date)
    }
}
