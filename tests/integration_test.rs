// Integration tests for event and settings persistence on disk

mod fixtures;

use fixtures::{blobs, dates, drafts};
use month_calendar::models::category::EventCategory;
use month_calendar::models::settings::Settings;
use month_calendar::services::event_store::{
    EventStore, CORRUPT_BACKUP_KEY, EVENTS_STORAGE_KEY,
};
use month_calendar::services::settings::{resolve_data_dir, SettingsService};
use month_calendar::services::storage::{FileStorage, KeyValueStorage};
use month_calendar::ui_egui::event_dialog::{EventEditor, SubmitOutcome};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn test_settings_persistence() {
    let dir = tempdir().expect("Failed to create temp dir");
    let service = SettingsService::new(dir.path().join("config").join("settings.toml"));

    // Missing file gives defaults
    let mut settings = service.get().expect("Failed to get settings");
    assert_eq!(settings, Settings::default());

    settings.theme = "dark".to_string();
    settings.max_events_per_cell = 5;
    settings.data_dir = Some(dir.path().join("data"));
    service.update(&settings).expect("Failed to update settings");

    let loaded = service.get().expect("Failed to load settings");
    assert_eq!(loaded, settings);
    assert_eq!(resolve_data_dir(&loaded), dir.path().join("data"));
}

#[test]
fn test_app_lifecycle_simulation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let day = dates::standup_day();

    // Simulate first app launch
    let standup_id = {
        let mut store = EventStore::load(FileStorage::new(dir.path()));
        assert_eq!(store.total_events(), 0);

        let standup = store.add_event(day, drafts::standup()).unwrap();
        store
            .add_event(dates::leap_day_2024(), drafts::birthday())
            .unwrap();
        standup.id
    };

    // Simulate second launch: everything is back, then edit
    {
        let mut store = EventStore::load(FileStorage::new(dir.path()));
        assert_eq!(store.total_events(), 2);
        assert_eq!(store.events_for_day(day)[0].id, standup_id);

        let updated = store
            .update_event(day, &standup_id, drafts::standup().with_time("10:00"))
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, standup_id);
    }

    // Third launch sees the edit
    let store = EventStore::load(FileStorage::new(dir.path()));
    assert_eq!(store.events_for_day(day)[0].time, "10:00");
    assert!(!store.is_dirty());
}

#[test]
fn test_add_then_delete_leaves_no_key_on_disk() {
    let dir = tempdir().expect("Failed to create temp dir");
    let day = dates::standup_day();
    let mut store = EventStore::load(FileStorage::new(dir.path()));

    let event = store.add_event(day, drafts::standup()).unwrap();
    store.delete_event(day, &event.id);

    assert!(store.events_for_day(day).is_empty());
    let raw = std::fs::read_to_string(dir.path().join("calendar-events.json")).unwrap();
    assert_eq!(raw, "{}");
}

#[test]
fn test_legacy_browser_blob_loads_into_canonical_keys() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut storage = FileStorage::new(dir.path());
    storage
        .set(EVENTS_STORAGE_KEY, blobs::LEGACY_BROWSER)
        .unwrap();

    let mut store = EventStore::load(storage);

    let keys: Vec<String> = store.day_keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["2024-02-29", "2024-03-04"]);

    let leap = store.events_for_day(dates::leap_day_2024());
    assert_eq!(leap.len(), 2);
    assert_eq!(leap[0].category, EventCategory::Social);
    assert_eq!(leap[1].description, "");

    // Next write rewrites the blob in canonical form, with a fresh id above the loaded ones
    let added = store
        .add_event(dates::new_years_eve_2025(), drafts::birthday())
        .unwrap();
    assert!(added.id.parse::<i64>().unwrap() > 1_709_539_200_000);

    let raw = store.storage().get(EVENTS_STORAGE_KEY).unwrap().unwrap();
    assert!(raw.contains("\"2024-03-04\""));
    assert!(!raw.contains("Mon Mar 04 2024"));
}

#[test]
fn test_malformed_blob_is_backed_up_and_store_starts_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut storage = FileStorage::new(dir.path());
    storage.set(EVENTS_STORAGE_KEY, blobs::MALFORMED).unwrap();

    let store = EventStore::load(storage);

    assert_eq!(store.total_events(), 0);
    assert_eq!(
        store.storage().get(CORRUPT_BACKUP_KEY).unwrap().as_deref(),
        Some(blobs::MALFORMED)
    );
}

#[test]
fn test_editor_round_trip_through_disk() {
    let dir = tempdir().expect("Failed to create temp dir");
    let day = dates::standup_day();
    let mut store = EventStore::load(FileStorage::new(dir.path()));
    let mut editor = EventEditor::new();

    editor.open_for_day(day);
    editor.form = drafts::blank();
    assert!(matches!(editor.submit(&mut store), SubmitOutcome::Rejected(_)));
    assert!(!dir.path().join("calendar-events.json").exists());

    editor.form = drafts::standup();
    let SubmitOutcome::Created(created) = editor.submit(&mut store) else {
        panic!("expected the standup to be created");
    };

    editor.open_for_event(day, created.clone());
    assert!(editor.delete(&mut store));

    let reloaded = EventStore::load(FileStorage::new(dir.path()));
    assert!(reloaded.events_for_day(day).is_empty());
    assert!(!reloaded.contains_day(day));
}
