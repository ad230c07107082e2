use std::collections::BTreeMap;

use super::EventStore;
use crate::models::day_key::DayKey;
use crate::models::event::Event;

impl EventStore {
    /// Events on `day` in insertion order, or an empty slice.
    pub fn events_for_day(&self, day: impl Into<DayKey>) -> &[Event] {
        self.events
            .get(&day.into())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn find_event(&self, day: impl Into<DayKey>, id: &str) -> Option<&Event> {
        self.events_for_day(day).iter().find(|e| e.id == id)
    }

    pub fn contains_day(&self, day: impl Into<DayKey>) -> bool {
        self.events.contains_key(&day.into())
    }

    /// Days that currently hold at least one event, in chronological order.
    pub fn day_keys(&self) -> impl Iterator<Item = &DayKey> + '_ {
        self.events.keys()
    }

    pub fn total_events(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    pub fn entries(&self) -> &BTreeMap<DayKey, Vec<Event>> {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use crate::models::day_key::DayKey;
    use crate::models::event::EventDraft;
    use crate::services::event_store::EventStore;
    use crate::services::storage::MemoryStorage;
    use chrono::{Local, NaiveDate, TimeZone};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_events_for_unknown_day_is_empty() {
        let store = EventStore::load(MemoryStorage::new());
        assert!(store.events_for_day(day(2024, 1, 1)).is_empty());
    }

    #[test]
    fn test_lookup_ignores_time_of_day() {
        let mut store = EventStore::load(MemoryStorage::new());
        let morning = Local.with_ymd_and_hms(2024, 3, 4, 8, 0, 0).unwrap();
        let night = Local.with_ymd_and_hms(2024, 3, 4, 22, 45, 0).unwrap();

        let event = store.add_event(morning, EventDraft::new("Gym")).unwrap();

        assert_eq!(store.events_for_day(night).len(), 1);
        assert_eq!(store.find_event(day(2024, 3, 4), &event.id), Some(&event));
    }

    #[test]
    fn test_day_keys_are_chronological() {
        let mut store = EventStore::load(MemoryStorage::new());
        store.add_event(day(2024, 5, 1), EventDraft::new("May")).unwrap();
        store.add_event(day(2023, 12, 25), EventDraft::new("Xmas")).unwrap();
        store.add_event(day(2024, 1, 1), EventDraft::new("New year")).unwrap();

        let keys: Vec<DayKey> = store.day_keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                DayKey::from(day(2023, 12, 25)),
                DayKey::from(day(2024, 1, 1)),
                DayKey::from(day(2024, 5, 1)),
            ]
        );
        assert_eq!(store.total_events(), 3);
    }
}
