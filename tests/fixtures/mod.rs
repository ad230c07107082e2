// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Monday, March 4, 2024
    pub fn standup_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Returns Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }
}

/// Sample event drafts for testing
pub mod drafts {
    use month_calendar::models::category::EventCategory;
    use month_calendar::models::event::EventDraft;

    /// A work meeting with a time
    pub fn standup() -> EventDraft {
        EventDraft::new("Standup")
            .with_time("09:30")
            .with_category(EventCategory::Work)
    }

    /// An untimed personal reminder
    pub fn birthday() -> EventDraft {
        EventDraft::new("Mum's birthday")
            .with_description("Call in the evening")
            .with_category(EventCategory::Personal)
    }

    /// A draft that fails validation
    pub fn blank() -> EventDraft {
        EventDraft::new("   ").with_time("10:00")
    }
}

/// Persisted blobs as written by the browser version of the calendar
pub mod blobs {
    /// Two days keyed with `Date.toDateString()` output
    pub const LEGACY_BROWSER: &str = r#"{
        "Mon Mar 04 2024": [
            {"id": "1709539200000", "title": "Standup", "description": "", "time": "09:30", "category": "work"}
        ],
        "Thu Feb 29 2024": [
            {"id": "1709190000000", "title": "Leap party", "description": "Cake", "time": "", "category": "social"},
            {"id": "1709190000001", "title": "Gym", "time": "18:00", "category": "health"}
        ]
    }"#;

    pub const MALFORMED: &str = "{\"Mon Mar 04 2024\": [";
}
