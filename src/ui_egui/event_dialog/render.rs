use egui::{Color32, RichText};

use crate::models::category::EventCategory;
use crate::services::event_store::EventStore;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::long_date;

use super::state::{EventEditor, SubmitOutcome};

/// What happened in the dialog this frame.
#[derive(Debug, Default)]
pub struct EventDialogResult {
    pub outcome: Option<SubmitOutcome>,
    pub deleted: bool,
}

const FORM_LABEL_WIDTH: f32 = 90.0;

pub fn render_event_dialog(
    ctx: &egui::Context,
    editor: &mut EventEditor,
    store: &mut EventStore,
) -> EventDialogResult {
    let mut result = EventDialogResult::default();
    let Some(day) = editor.selected_day() else {
        return result;
    };

    let mut window_open = true;
    egui::Window::new(if editor.is_editing() {
        "Edit Event"
    } else {
        "New Event"
    })
    .open(&mut window_open)
    .collapsible(false)
    .resizable(false)
    .default_width(420.0)
    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
    .show(ctx, |ui| {
        ui.label(RichText::new(long_date(day)).strong());
        ui.add_space(8.0);

        render_error_banner(ui, editor);
        render_form_fields(ui, editor);

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        result = render_action_buttons(ui, editor, store);
    });

    if !window_open {
        editor.cancel();
    }

    result
}

fn render_error_banner(ui: &mut egui::Ui, editor: &EventEditor) {
    if let Some(ref error) = editor.error_message {
        ui.colored_label(Color32::RED, RichText::new(error).strong());
        ui.add_space(8.0);
    }
}

fn render_form_fields(ui: &mut egui::Ui, editor: &mut EventEditor) {
    labeled_row(
        ui,
        if editor.form.title.trim().is_empty() {
            RichText::new("Title:")
                .strong()
                .color(Color32::from_rgb(255, 150, 150))
        } else {
            RichText::new("Title:").strong()
        },
        |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut editor.form.title).hint_text("Event title"),
            );
            ui.label(RichText::new("*").color(Color32::from_rgb(255, 150, 150)));

            if response.changed() && editor.error_message.is_some() {
                editor.error_message = None;
            }
        },
    );

    labeled_row(ui, "Time:", |ui| {
        ui.add(
            egui::TextEdit::singleline(&mut editor.form.time)
                .hint_text("HH:MM (e.g., 10:30)")
                .desired_width(140.0),
        );
    });

    labeled_row(ui, "Category:", |ui| {
        ui.horizontal_wrapped(|ui| {
            for category in EventCategory::ALL {
                let swatch = CalendarTheme::category_color(category);
                ui.label(RichText::new("■").color(swatch));
                ui.radio_value(&mut editor.form.category, category, category.label());
            }
        });
    });

    labeled_row(ui, "Description:", |ui| {
        let width = ui.available_width();
        ui.add_sized(
            [width, 80.0],
            egui::TextEdit::multiline(&mut editor.form.description),
        );
    });
}

fn render_action_buttons(
    ui: &mut egui::Ui,
    editor: &mut EventEditor,
    store: &mut EventStore,
) -> EventDialogResult {
    let mut result = EventDialogResult::default();

    indented_row(ui, |ui| {
        let can_save = editor.can_submit();
        let label = if editor.is_editing() { "Update" } else { "Save" };
        let save_button = egui::Button::new(label).fill(if can_save {
            Color32::from_rgb(70, 120, 200)
        } else {
            Color32::from_gray(60)
        });

        ui.add_enabled_ui(can_save, |ui| {
            if ui.add(save_button).clicked() {
                result.outcome = Some(editor.submit(store));
            }
        });

        if !can_save {
            ui.label(
                RichText::new("(Title required)")
                    .small()
                    .color(Color32::from_gray(150)),
            );
        }

        if ui.button("Cancel").clicked() {
            editor.cancel();
        }

        if editor.is_editing() {
            let delete_button =
                egui::Button::new(RichText::new("Delete").color(Color32::WHITE))
                    .fill(Color32::from_rgb(200, 60, 60));
            if ui.add(delete_button).clicked() {
                result.deleted = editor.delete(store);
            }
        }
    });

    result
}

fn labeled_row<F>(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>, add_contents: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.horizontal(|ui| {
        render_form_label(ui, label);
        add_contents(ui);
    });
}

fn render_form_label(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>) {
    let text = label.into();
    ui.allocate_ui_with_layout(
        egui::Vec2::new(FORM_LABEL_WIDTH, 24.0),
        egui::Layout::right_to_left(egui::Align::Center),
        move |ui| {
            ui.label(text);
        },
    );
}

fn indented_row<F>(ui: &mut egui::Ui, add_contents: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.horizontal(|ui| {
        ui.add_space(FORM_LABEL_WIDTH);
        add_contents(ui);
    });
}
