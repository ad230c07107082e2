use super::CalendarApp;
use crate::utils::date::shift_month;
use chrono::Local;

impl CalendarApp {
    pub(crate) fn navigate_previous(&mut self) {
        self.current_date = shift_month(self.current_date, -1);
    }

    pub(crate) fn navigate_next(&mut self) {
        self.current_date = shift_month(self.current_date, 1);
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.current_date = Local::now().date_naive();
    }
}
