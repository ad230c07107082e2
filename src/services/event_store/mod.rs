//! Day-keyed event store.
//!
//! Holds every event grouped by [`DayKey`], in insertion order within a day.
//! The whole mapping is serialized as one JSON object under
//! [`EVENTS_STORAGE_KEY`] and rewritten after every mutation. The in-memory
//! map is the source of truth for the running session; a failed write is
//! logged and retried with the next mutation.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::Local;

use crate::models::day_key::DayKey;
use crate::models::event::Event;
use crate::services::storage::KeyValueStorage;

pub mod crud;
pub mod queries;

/// Storage key of the serialized event mapping.
pub const EVENTS_STORAGE_KEY: &str = "calendar-events";
/// Where an unreadable blob is copied before it gets overwritten.
pub const CORRUPT_BACKUP_KEY: &str = "calendar-events-corrupt";

pub struct EventStore {
    pub(crate) events: BTreeMap<DayKey, Vec<Event>>,
    storage: Box<dyn KeyValueStorage>,
    /// Highest numeric id issued or seen; new ids are always greater
    last_id: i64,
    dirty: bool,
}

impl EventStore {
    /// Empty store that has not read anything from `storage`.
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            events: BTreeMap::new(),
            storage: Box::new(storage),
            last_id: 0,
            dirty: false,
        }
    }

    /// Read the persisted mapping. Missing or malformed data yields an empty store.
    pub fn load(storage: impl KeyValueStorage + 'static) -> Self {
        let mut store = Self::new(storage);

        let blob = match store.storage.get(EVENTS_STORAGE_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                log::info!("No stored events found, starting empty");
                return store;
            }
            Err(e) => {
                log::warn!("Failed to read stored events: {:#}, starting empty", e);
                return store;
            }
        };

        match parse_events(&blob) {
            Ok(events) => {
                store.events = events;
                store.last_id = highest_numeric_id(&store.events);
                log::info!(
                    "Loaded {} events across {} days",
                    store.total_events(),
                    store.events.len()
                );
            }
            Err(e) => {
                log::warn!("Stored events are malformed: {:#}, starting empty", e);
                if let Err(backup_err) = store.storage.set(CORRUPT_BACKUP_KEY, &blob) {
                    log::warn!("Failed to back up malformed events: {:#}", backup_err);
                }
            }
        }

        store
    }

    /// Serialize the full mapping and write it to storage.
    pub fn save(&mut self) -> Result<()> {
        let json = self.to_json()?;
        match self.storage.set(EVENTS_STORAGE_KEY, &json) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                self.dirty = true;
                Err(e.context("Failed to persist events"))
            }
        }
    }

    /// Serialized form of the current mapping, as written by [`save`](Self::save).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.events).context("Failed to serialize events")
    }

    /// True when the last write failed and storage is behind memory.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn storage(&self) -> &dyn KeyValueStorage {
        self.storage.as_ref()
    }

    /// Save after a mutation. Failures are logged, never returned.
    pub(crate) fn persist(&mut self) {
        if let Err(e) = self.save() {
            log::error!("{:#}", e);
        }
    }

    pub(crate) fn next_id(&mut self) -> String {
        self.next_id_at(Local::now().timestamp_millis())
    }

    /// Millisecond timestamp, bumped past every id seen so far.
    ///
    /// Stored ids can push the counter to `i64::MAX`. From there the first
    /// unused value at or after `now_millis` is handed out instead.
    pub(crate) fn next_id_at(&mut self, now_millis: i64) -> String {
        match self.last_id.checked_add(1) {
            Some(floor) => {
                let id = now_millis.max(floor);
                self.last_id = id;
                id.to_string()
            }
            None => {
                log::warn!("Event id counter exhausted, searching for an unused id");
                let mut candidate = now_millis.max(0);
                while self.id_in_use(&candidate.to_string()) {
                    candidate = candidate.wrapping_add(1).max(0);
                }
                candidate.to_string()
            }
        }
    }

    fn id_in_use(&self, id: &str) -> bool {
        self.events.values().flatten().any(|event| event.id == id)
    }
}

/// Parse a stored blob. Unrecognizable day keys and empty lists are dropped.
fn parse_events(blob: &str) -> Result<BTreeMap<DayKey, Vec<Event>>> {
    let raw: BTreeMap<String, Vec<Event>> =
        serde_json::from_str(blob).context("failed to deserialize events")?;

    let mut events: BTreeMap<DayKey, Vec<Event>> = BTreeMap::new();
    for (raw_key, day_events) in raw {
        let Some(key) = DayKey::parse(&raw_key) else {
            log::warn!("Skipping events under unrecognized day key {:?}", raw_key);
            continue;
        };
        if day_events.is_empty() {
            continue;
        }
        // A legacy key and a canonical key may name the same day
        events.entry(key).or_default().extend(day_events);
    }
    Ok(events)
}

fn highest_numeric_id(events: &BTreeMap<DayKey, Vec<Event>>) -> i64 {
    events
        .values()
        .flatten()
        .filter_map(|event| event.id.parse::<i64>().ok())
        .max()
        .unwrap_or(0)
}
