use chrono::NaiveDate;
use egui::{Color32, Margin, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::CalendarCellPalette;
use super::{fit_chips, split_visible};
use crate::models::calendar_cell::CalendarCell;
use crate::models::event::Event;
use crate::services::event_store::EventStore;
use crate::services::month_grid::{generate_grid_now, weeks, DAYS_PER_WEEK};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::WEEKDAY_HEADERS;

const MIN_CELL_HEIGHT: f32 = 90.0;
const CHIP_HEIGHT: f32 = 16.0;
const CHIP_WITH_TIME_HEIGHT: f32 = 28.0;
const CHIP_SPACING: f32 = 2.0;
const GRID_SPACING: f32 = 2.0;

/// Action returned from month view
#[derive(Debug, Clone, PartialEq)]
pub enum MonthViewAction {
    /// No action
    None,
    /// Empty area of a day cell clicked
    CreateEvent(NaiveDate),
    /// Event chip clicked
    EditEvent(NaiveDate, Event),
}

pub struct MonthView;

impl MonthView {
    pub fn show(
        ui: &mut egui::Ui,
        current_date: NaiveDate,
        store: &EventStore,
        theme: &CalendarTheme,
        max_events_per_cell: usize,
    ) -> MonthViewAction {
        let mut action = MonthViewAction::None;
        let palette = CalendarCellPalette::from_theme(theme);
        let cells = generate_grid_now(current_date);
        let week_count = cells.len() / DAYS_PER_WEEK;

        let total_spacing = GRID_SPACING * (DAYS_PER_WEEK as f32 - 1.0);
        let col_width = ((ui.available_width() - total_spacing) / DAYS_PER_WEEK as f32).max(40.0);

        egui::Grid::new("month_header_grid")
            .spacing([GRID_SPACING, GRID_SPACING])
            .show(ui, |ui| {
                for day in WEEKDAY_HEADERS {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, 28.0),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .inner_margin(Margin::symmetric(8.0, 6.0))
                                .show(ui, |ui| {
                                    ui.label(
                                        egui::RichText::new(day)
                                            .size(13.0)
                                            .color(palette.header_text)
                                            .strong(),
                                    );
                                });
                        },
                    );
                }
            });

        ui.separator();

        let rows_spacing = GRID_SPACING * week_count.saturating_sub(1) as f32;
        let cell_height = ((ui.available_height() - rows_spacing) / week_count.max(1) as f32)
            .max(MIN_CELL_HEIGHT);

        egui::Grid::new("month_grid")
            .spacing([GRID_SPACING, GRID_SPACING])
            .show(ui, |ui| {
                for week in weeks(&cells) {
                    for cell in week {
                        let events = store.events_for_day(cell.day_key());
                        let cell_action = Self::render_day_cell(
                            ui,
                            cell,
                            events,
                            palette,
                            Vec2::new(col_width, cell_height),
                            max_events_per_cell,
                        );
                        if cell_action != MonthViewAction::None {
                            action = cell_action;
                        }
                    }
                    ui.end_row();
                }
            });

        action
    }

    fn render_day_cell(
        ui: &mut egui::Ui,
        cell: &CalendarCell,
        events: &[Event],
        palette: CalendarCellPalette,
        size: Vec2,
        max_events_per_cell: usize,
    ) -> MonthViewAction {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        let bg_color = if cell.is_today {
            palette.today_bg
        } else if cell.is_in_displayed_month {
            palette.regular_bg
        } else {
            palette.outside_bg
        };
        ui.painter().rect_filled(rect, 2.0, bg_color);

        let border = if cell.is_today {
            Stroke::new(1.5, palette.today_border)
        } else {
            Stroke::new(1.0, palette.border)
        };
        ui.painter().rect_stroke(rect, 2.0, border);

        if response.hovered() {
            ui.painter()
                .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_border));
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        let text_color = if cell.is_in_displayed_month {
            palette.text
        } else {
            palette.outside_text
        };
        Self::paint_day_number(ui, rect, cell, text_color, palette.today_border);

        let (visible, _) = split_visible(events, max_events_per_cell);
        let chip_heights: Vec<f32> = visible.iter().map(chip_height).collect();
        let top = rect.top() + 26.0;
        let (drawn, hidden) =
            fit_chips(&chip_heights, CHIP_SPACING, rect.bottom() - 2.0 - top, events.len());

        let mut hitboxes: Vec<(Rect, &Event)> = Vec::with_capacity(drawn);
        let mut y = top;
        for (event, height) in visible.iter().zip(&chip_heights).take(drawn) {
            let chip = Rect::from_min_size(
                Pos2::new(rect.left() + 3.0, y),
                Vec2::new(rect.width() - 6.0, *height),
            );
            Self::paint_event_chip(ui, chip, event);
            hitboxes.push((chip, event));
            y += height + CHIP_SPACING;
        }

        let mut more_rect = None;
        if hidden > 0 {
            let text_rect = ui.painter().text(
                Pos2::new(rect.left() + 6.0, y),
                egui::Align2::LEFT_TOP,
                format!("+{} more", hidden),
                egui::FontId::proportional(11.0),
                palette.outside_text,
            );
            more_rect = Some(text_rect);
        }

        let pointer = ui.input(|i| i.pointer.hover_pos());
        let hovered_event = pointer.and_then(|pos| {
            hitboxes
                .iter()
                .find(|(chip, _)| chip.contains(pos))
                .map(|(chip, event)| (*chip, *event))
        });

        let over_more = pointer.is_some_and(|pos| more_rect.is_some_and(|r| r.contains(pos)));
        if over_more && response.hovered() {
            let titles: Vec<&str> = events[drawn..].iter().map(|e| e.title.as_str()).collect();
            response.clone().on_hover_text(titles.join("\n"));
        }

        if let Some((chip, event)) = hovered_event {
            if response.hovered() {
                ui.painter().rect_stroke(
                    chip.expand(1.0),
                    3.0,
                    Stroke::new(2.0, Color32::from_rgba_unmultiplied(255, 255, 255, 180)),
                );
                let tooltip = event_tooltip(event);
                response.clone().on_hover_text(tooltip);
            }
        }

        if response.clicked() {
            return match hovered_event {
                Some((_, event)) => MonthViewAction::EditEvent(cell.date, event.clone()),
                None => MonthViewAction::CreateEvent(cell.date),
            };
        }

        MonthViewAction::None
    }

    fn paint_day_number(
        ui: &egui::Ui,
        rect: Rect,
        cell: &CalendarCell,
        text_color: Color32,
        today_color: Color32,
    ) {
        let day_text = cell.day_of_month().to_string();
        let anchor = Pos2::new(rect.left() + 14.0, rect.top() + 13.0);

        if cell.is_today {
            ui.painter().circle_filled(anchor, 11.0, today_color);
            ui.painter().text(
                anchor,
                egui::Align2::CENTER_CENTER,
                day_text,
                egui::FontId::proportional(13.0),
                Color32::WHITE,
            );
        } else {
            ui.painter().text(
                anchor,
                egui::Align2::CENTER_CENTER,
                day_text,
                egui::FontId::proportional(13.0),
                text_color,
            );
        }
    }

    fn paint_event_chip(ui: &egui::Ui, chip: Rect, event: &Event) {
        ui.painter()
            .rect_filled(chip, 3.0, CalendarTheme::category_color(event.category));

        let font_id = egui::FontId::proportional(11.0);
        let max_width = chip.width() - 8.0;
        let title = truncate_to_width(ui, &event.title, &font_id, max_width);
        ui.painter().text(
            Pos2::new(chip.left() + 4.0, chip.top() + 2.0),
            egui::Align2::LEFT_TOP,
            title,
            font_id.clone(),
            Color32::WHITE,
        );

        if event.has_time() {
            let time = truncate_to_width(ui, &event.time, &font_id, max_width);
            ui.painter().text(
                Pos2::new(chip.left() + 4.0, chip.top() + 14.0),
                egui::Align2::LEFT_TOP,
                time,
                font_id,
                Color32::from_rgba_unmultiplied(255, 255, 255, 220),
            );
        }
    }
}

fn chip_height(event: &Event) -> f32 {
    if event.has_time() {
        CHIP_WITH_TIME_HEIGHT
    } else {
        CHIP_HEIGHT
    }
}

fn event_tooltip(event: &Event) -> String {
    let mut lines = vec![event.title.clone()];
    if event.has_time() {
        lines.push(format!("🕐 {}", event.time));
    }
    lines.push(format!("Category: {}", event.category));
    if !event.description.trim().is_empty() {
        lines.push(event.description.clone());
    }
    lines.join("\n")
}

/// Truncate text to fit within a given pixel width, appending "…" when cut.
fn truncate_to_width(ui: &egui::Ui, text: &str, font_id: &egui::FontId, max_width: f32) -> String {
    if max_width <= 0.0 {
        return String::new();
    }

    let measure = |candidate: &str| {
        let job = egui::text::LayoutJob::simple(
            candidate.to_string(),
            font_id.clone(),
            Color32::WHITE,
            f32::INFINITY,
        );
        ui.fonts(|f| f.layout_job(job).size().x)
    };

    if measure(text) <= max_width {
        return text.to_string();
    }

    let mut boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
    boundaries.push(text.len());

    let mut low = 0usize;
    let mut high = boundaries.len().saturating_sub(1);
    while low < high {
        let mid = (low + high).div_ceil(2);
        let candidate = format!("{}…", &text[..boundaries[mid]]);
        if measure(&candidate) <= max_width {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    format!("{}…", &text[..boundaries[low]])
}
