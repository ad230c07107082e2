//! Theme module for the egui calendar application
//!
//! Defines the CalendarTheme structure and colour helpers for category chips.

use egui::Color32;

use crate::models::category::EventCategory;
use crate::models::settings::Settings;

/// A calendar theme defining all colors used in the application
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Background of padding days from neighbouring months
    pub outside_month_background: Color32,

    /// Today's date background color
    pub today_background: Color32,

    /// Today's date border color
    pub today_border: Color32,

    /// Regular day background color
    pub day_background: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (padding days, "+N more")
    pub text_secondary: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            outside_month_background: Color32::from_rgb(249, 250, 251),
            today_background: Color32::from_rgb(239, 246, 255),
            today_border: Color32::from_rgb(37, 99, 235),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(229, 231, 235),
            text_primary: Color32::from_rgb(17, 24, 39),
            text_secondary: Color32::from_rgb(156, 163, 175),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            outside_month_background: Color32::from_rgb(34, 34, 36),
            today_background: Color32::from_rgb(40, 52, 78),
            today_border: Color32::from_rgb(96, 165, 250),
            day_background: Color32::from_rgb(42, 42, 42),
            day_border: Color32::from_rgb(60, 60, 60),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(120, 120, 120),
        }
    }

    /// Theme selected in the settings file.
    pub fn for_settings(settings: &Settings) -> Self {
        if settings.is_dark_theme() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.day_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Chip colour for an event category.
    pub fn category_color(category: EventCategory) -> Color32 {
        Self::hex_to_color(category.color()).unwrap_or(Color32::GRAY)
    }

    /// Parse hex string to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let hex = hex.trim_start_matches('#');

        if hex.len() != 6 {
            return Err("Hex color must be 6 characters".to_string());
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;

        Ok(Color32::from_rgb(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        let result = CalendarTheme::hex_to_color("#FF8040").unwrap();
        assert_eq!(result, Color32::from_rgb(255, 128, 64));

        let result2 = CalendarTheme::hex_to_color("FF8040").unwrap();
        assert_eq!(result2, Color32::from_rgb(255, 128, 64));

        assert!(CalendarTheme::hex_to_color("#FFF").is_err());
        assert!(CalendarTheme::hex_to_color("#GGGGGG").is_err());
    }

    #[test]
    fn test_category_colors_parse() {
        assert_eq!(
            CalendarTheme::category_color(EventCategory::Work),
            Color32::from_rgb(0x3B, 0x82, 0xF6)
        );
        for category in EventCategory::ALL {
            assert_ne!(CalendarTheme::category_color(category), Color32::GRAY);
        }
    }

    #[test]
    fn test_for_settings() {
        let dark = Settings {
            theme: "Dark".to_string(),
            ..Settings::default()
        };
        assert!(CalendarTheme::for_settings(&dark).is_dark);
        assert_eq!(CalendarTheme::for_settings(&Settings::default()), CalendarTheme::light());
    }
}
