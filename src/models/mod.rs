// Module exports for models

pub mod calendar_cell;
pub mod category;
pub mod day_key;
pub mod event;
pub mod settings;
