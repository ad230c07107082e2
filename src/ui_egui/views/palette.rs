use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub outside_bg: Color32,
    pub today_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub text: Color32,
    pub outside_text: Color32,
    pub hover_border: Color32,
    pub header_text: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            outside_bg: theme.outside_month_background,
            today_bg: theme.today_background,
            border: theme.day_border,
            today_border: theme.today_border,
            text: theme.text_primary,
            outside_text: theme.text_secondary,
            hover_border: with_alpha(theme.today_border, if theme.is_dark { 160 } else { 120 }),
            header_text: theme.text_secondary,
        }
    }
}
