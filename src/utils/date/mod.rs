// Date utility functions
// Month arithmetic shared by the grid generator and navigation

use chrono::{Datelike, NaiveDate};

/// Column headers for a Sunday-first week.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days in the given month.
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let last = last_day_of_month(date.year(), date.month());
    date.with_day(last).unwrap_or(date)
}

/// Move by whole months, clamping the day to the target month's length.
pub fn shift_month(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let day = current.day().min(last_day_of_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(current)
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Header text such as "February 2024".
pub fn month_title(date: NaiveDate) -> String {
    format!("{} {}", month_name(date.month()), date.year())
}

/// Long form used by the event dialog, e.g. "Monday, March 4, 2024".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(2024, 2 => 29 ; "leap february")]
    #[test_case(2023, 2 => 28 ; "common february")]
    #[test_case(1900, 2 => 28 ; "century non leap")]
    #[test_case(2000, 2 => 29 ; "four hundred leap")]
    #[test_case(2024, 4 => 30 ; "april")]
    #[test_case(2024, 12 => 31 ; "december")]
    fn test_last_day_of_month(year: i32, month: u32) -> u32 {
        last_day_of_month(year, month)
    }

    #[test]
    fn test_first_and_last_of_month() {
        assert_eq!(first_of_month(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(last_of_month(date(2024, 2, 17)), date(2024, 2, 29));
    }

    #[test]
    fn test_shift_month_clamps_day() {
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2024, 3, 31), -1), date(2024, 2, 29));
    }

    #[test]
    fn test_shift_month_crosses_years() {
        assert_eq!(shift_month(date(2024, 12, 15), 1), date(2025, 1, 15));
        assert_eq!(shift_month(date(2024, 1, 15), -1), date(2023, 12, 15));
        assert_eq!(shift_month(date(2024, 6, 1), -18), date(2022, 12, 1));
    }

    #[test]
    fn test_month_title() {
        assert_eq!(month_title(date(2024, 2, 10)), "February 2024");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_long_date() {
        assert_eq!(long_date(date(2024, 3, 4)), "Monday, March 4, 2024");
    }
}
