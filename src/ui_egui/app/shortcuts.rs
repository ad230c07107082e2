use super::CalendarApp;

/// Shortcut keys pressed this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PressedShortcuts {
    pub escape: bool,
    pub new_event: bool,
    pub today: bool,
    pub previous_month: bool,
    pub next_month: bool,
}

impl PressedShortcuts {
    fn read(i: &egui::InputState) -> Self {
        Self {
            escape: i.key_pressed(egui::Key::Escape),
            new_event: i.modifiers.ctrl && i.key_pressed(egui::Key::N),
            today: i.modifiers.ctrl && i.key_pressed(egui::Key::T),
            previous_month: i.key_pressed(egui::Key::ArrowLeft),
            next_month: i.key_pressed(egui::Key::ArrowRight),
        }
    }
}

impl CalendarApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let pressed = ctx.input(PressedShortcuts::read);
        self.apply_shortcuts(pressed);
    }

    pub(crate) fn apply_shortcuts(&mut self, pressed: PressedShortcuts) {
        if pressed.escape && self.editor.is_open() {
            self.editor.cancel();
            return;
        }

        // Navigation keys would otherwise move the text cursor in the dialog
        if self.editor.is_open() {
            return;
        }

        if pressed.new_event {
            self.open_quick_add();
        }
        if pressed.today {
            self.jump_to_today();
        }
        if pressed.previous_month {
            self.navigate_previous();
        }
        if pressed.next_month {
            self.navigate_next();
        }
    }
}
