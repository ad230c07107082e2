use chrono::NaiveDate;

use crate::models::event::{Event, EventDraft, EventValidationError};
use crate::services::event_store::EventStore;

/// Which flow the dialog is in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Closed,
    Creating {
        day: NaiveDate,
    },
    Editing {
        day: NaiveDate,
        event: Event,
    },
}

/// Result of pressing save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was open, or the edited event no longer exists
    Ignored,
    /// Validation failed; the dialog stays open with the user's input
    Rejected(EventValidationError),
    Created(Event),
    Updated(Event),
}

/// State for the create/edit event dialog.
///
/// `form` holds the user's unsaved input. It is rebuilt on every open and
/// discarded on cancel.
#[derive(Debug, Default)]
pub struct EventEditor {
    mode: EditorMode,
    pub form: EventDraft,
    pub error_message: Option<String>,
}

impl EventEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.mode, EditorMode::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing { .. })
    }

    /// Day the dialog is bound to, if open.
    pub fn selected_day(&self) -> Option<NaiveDate> {
        match &self.mode {
            EditorMode::Closed => None,
            EditorMode::Creating { day } | EditorMode::Editing { day, .. } => Some(*day),
        }
    }

    /// Start creating a new event on `day` with a blank form.
    pub fn open_for_day(&mut self, day: NaiveDate) {
        self.mode = EditorMode::Creating { day };
        self.form = EventDraft::default();
        self.error_message = None;
    }

    /// Start editing `event`, pre-filling the form from it.
    pub fn open_for_event(&mut self, day: NaiveDate, event: Event) {
        self.form = event.to_draft();
        self.mode = EditorMode::Editing { day, event };
        self.error_message = None;
    }

    /// Whether save is currently allowed.
    pub fn can_submit(&self) -> bool {
        self.is_open() && self.form.is_valid()
    }

    /// Commit the form. On success the dialog closes.
    pub fn submit(&mut self, store: &mut EventStore) -> SubmitOutcome {
        if let Err(err) = self.form.validate() {
            if self.is_open() {
                self.error_message = Some(err.to_string());
                return SubmitOutcome::Rejected(err);
            }
            return SubmitOutcome::Ignored;
        }

        let outcome = match self.mode.clone() {
            EditorMode::Closed => return SubmitOutcome::Ignored,
            EditorMode::Creating { day } => match store.add_event(day, self.form.clone()) {
                Ok(event) => SubmitOutcome::Created(event),
                Err(err) => return self.reject(err),
            },
            EditorMode::Editing { day, event } => {
                match store.update_event(day, &event.id, self.form.clone()) {
                    Ok(Some(updated)) => SubmitOutcome::Updated(updated),
                    Ok(None) => {
                        log::warn!("Event {} disappeared before it could be updated", event.id);
                        SubmitOutcome::Ignored
                    }
                    Err(err) => return self.reject(err),
                }
            }
        };

        self.close();
        outcome
    }

    /// Delete the event being edited. Does nothing unless in edit mode.
    pub fn delete(&mut self, store: &mut EventStore) -> bool {
        let (day, id) = match &self.mode {
            EditorMode::Editing { day, event } => (*day, event.id.clone()),
            _ => return false,
        };

        if store.delete_event(day, &id).is_none() {
            log::warn!("Event {} was already gone when deleting", id);
        }
        self.close();
        true
    }

    /// Close without saving.
    pub fn cancel(&mut self) {
        self.close();
    }

    fn reject(&mut self, err: EventValidationError) -> SubmitOutcome {
        self.error_message = Some(err.to_string());
        SubmitOutcome::Rejected(err)
    }

    fn close(&mut self) {
        self.mode = EditorMode::Closed;
        self.form = EventDraft::default();
        self.error_message = None;
    }
}
