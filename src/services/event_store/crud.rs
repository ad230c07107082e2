use super::EventStore;
use crate::models::day_key::DayKey;
use crate::models::event::{Event, EventDraft, EventValidationError};

impl EventStore {
    /// Append a new event to `day`, creating the day slot if needed.
    pub fn add_event(
        &mut self,
        day: impl Into<DayKey>,
        draft: EventDraft,
    ) -> Result<Event, EventValidationError> {
        draft.validate()?;

        let key = day.into();
        let id = self.next_id();
        let event = Event::from_draft(id, draft)?;

        self.events.entry(key).or_default().push(event.clone());
        log::debug!("Added event {} on {}", event.id, key);
        self.persist();

        Ok(event)
    }

    /// Replace the fields of the event `id` on `day`, keeping its id and position.
    ///
    /// Returns `Ok(None)` without persisting when no such event exists.
    pub fn update_event(
        &mut self,
        day: impl Into<DayKey>,
        id: &str,
        draft: EventDraft,
    ) -> Result<Option<Event>, EventValidationError> {
        draft.validate()?;

        let key = day.into();
        let Some(event) = self
            .events
            .get_mut(&key)
            .and_then(|events| events.iter_mut().find(|e| e.id == id))
        else {
            log::debug!("Update ignored: no event {} on {}", id, key);
            return Ok(None);
        };

        event.apply(draft);
        let updated = event.clone();
        self.persist();

        Ok(Some(updated))
    }

    /// Remove the event `id` from `day`. The day slot is dropped once empty.
    pub fn delete_event(&mut self, day: impl Into<DayKey>, id: &str) -> Option<Event> {
        let key = day.into();
        let events = self.events.get_mut(&key)?;
        let index = events.iter().position(|e| e.id == id)?;
        let removed = events.remove(index);

        if events.is_empty() {
            self.events.remove(&key);
        }
        log::debug!("Deleted event {} on {}", removed.id, key);
        self.persist();

        Some(removed)
    }
}
