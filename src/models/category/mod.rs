//! Category model for organizing events.
//!
//! Every event belongs to exactly one of a fixed set of categories, each
//! with a display label and a colour used for the event chips in the grid.

use serde::{Deserialize, Serialize};

/// The category an event is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum EventCategory {
    Work,
    Personal,
    Health,
    Social,
    /// Fallback for missing or unrecognised category strings
    #[default]
    Other,
}

impl EventCategory {
    /// All categories in the order the editor offers them.
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Work,
        EventCategory::Personal,
        EventCategory::Health,
        EventCategory::Social,
        EventCategory::Other,
    ];

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Health => "Health",
            Self::Social => "Social",
            Self::Other => "Other",
        }
    }

    /// Stable lowercase identifier, matching the persisted form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Health => "health",
            Self::Social => "social",
            Self::Other => "other",
        }
    }

    /// Hex colour code for the category chip (e.g., "#3B82F6").
    pub fn color(&self) -> &'static str {
        match self {
            Self::Work => "#3B82F6",
            Self::Personal => "#22C55E",
            Self::Health => "#EF4444",
            Self::Social => "#A855F7",
            Self::Other => "#6B7280",
        }
    }

    /// Parse a category identifier, case-insensitively. Unknown values map to `Other`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "work" => Self::Work,
            "personal" => Self::Personal,
            "health" => Self::Health,
            "social" => Self::Social,
            _ => Self::Other,
        }
    }
}

impl From<Option<String>> for EventCategory {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::parse).unwrap_or_default()
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_other() {
        assert_eq!(EventCategory::default(), EventCategory::Other);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&EventCategory::Health).unwrap();
        assert_eq!(json, "\"health\"");
    }

    #[test]
    fn test_unknown_category_deserializes_as_other() {
        let cat: EventCategory = serde_json::from_str("\"birthday\"").unwrap();
        assert_eq!(cat, EventCategory::Other);
    }

    #[test]
    fn test_null_category_deserializes_as_other() {
        let cat: EventCategory = serde_json::from_str("null").unwrap();
        assert_eq!(cat, EventCategory::Other);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(EventCategory::parse("Work"), EventCategory::Work);
        assert_eq!(EventCategory::parse(" SOCIAL "), EventCategory::Social);
        assert_eq!(EventCategory::parse(""), EventCategory::Other);
    }

    #[test]
    fn test_as_str_round_trips_through_parse() {
        for cat in EventCategory::ALL {
            assert_eq!(EventCategory::parse(cat.as_str()), cat);
        }
    }

    #[test]
    fn test_colors_are_hex() {
        for cat in EventCategory::ALL {
            let color = cat.color();
            assert!(color.starts_with('#'));
            assert_eq!(color.len(), 7);
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(EventCategory::Personal.to_string(), "Personal");
    }
}
