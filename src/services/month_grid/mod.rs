//! Month grid generation.
//!
//! Produces the cells of a Sunday-first, 7-column grid covering a whole month,
//! padded with days from the neighbouring months so that every row is a full
//! week.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::models::calendar_cell::CalendarCell;
use crate::utils::date::{first_of_month, last_of_month};

pub const DAYS_PER_WEEK: usize = 7;

/// Cells for the month containing `reference`, flagged against `today`.
///
/// The first cell is the Sunday on or before the 1st and the last cell is the
/// Saturday on or after the month's last day.
pub fn generate_grid(reference: NaiveDate, today: NaiveDate) -> Vec<CalendarCell> {
    let first = first_of_month(reference);
    let last = last_of_month(reference);

    let leading = first.weekday().num_days_from_sunday() as i64;
    let trailing = 6 - last.weekday().num_days_from_sunday() as i64;
    let start = first - Duration::days(leading);
    let end = last + Duration::days(trailing);

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| CalendarCell {
            date,
            is_in_displayed_month: date.year() == reference.year()
                && date.month() == reference.month(),
            is_today: date == today,
        })
        .collect()
}

/// [`generate_grid`] against the current local date.
pub fn generate_grid_now(reference: NaiveDate) -> Vec<CalendarCell> {
    generate_grid(reference, Local::now().date_naive())
}

/// Split a grid into week rows.
pub fn weeks(cells: &[CalendarCell]) -> impl Iterator<Item = &[CalendarCell]> {
    cells.chunks(DAYS_PER_WEEK)
}
