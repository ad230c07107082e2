// Event module
// Calendar event model and the editable draft used by the event dialog

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::category::EventCategory;

/// Validation errors for event data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventValidationError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
}

/// A calendar event stored under a single day.
///
/// `id` is assigned by the event store when the event is created and never
/// changes afterwards. Optional fields default to empty when missing from
/// persisted data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-form time label, usually "HH:MM"
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub category: EventCategory,
}

impl Event {
    /// Create an event from a draft with an already assigned id.
    ///
    /// # Examples
    /// ```
    /// use month_calendar::models::event::{Event, EventDraft};
    ///
    /// let draft = EventDraft::new("Standup").with_time("09:30");
    /// let event = Event::from_draft("1709539200000", draft).unwrap();
    /// assert_eq!(event.title, "Standup");
    /// ```
    pub fn from_draft(
        id: impl Into<String>,
        draft: EventDraft,
    ) -> Result<Self, EventValidationError> {
        draft.validate()?;
        Ok(Self {
            id: id.into(),
            title: draft.title,
            description: draft.description,
            time: draft.time,
            category: draft.category,
        })
    }

    /// Replace every editable field with the draft's values. The id is kept.
    pub fn apply(&mut self, draft: EventDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.time = draft.time;
        self.category = draft.category;
    }

    /// Copy of the editable fields, as used to pre-fill the editor.
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            time: self.time.clone(),
            category: self.category,
        }
    }

    /// Whether a time label should be displayed for this event.
    pub fn has_time(&self) -> bool {
        !self.time.trim().is_empty()
    }
}

/// Editable event fields, without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub time: String,
    pub category: EventCategory,
}

impl EventDraft {
    /// Create a draft with a title and default values for everything else
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the time label
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.category = category;
        self
    }

    /// Title must be non-empty after trimming; nothing else is checked.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
