// Service module exports

pub mod event_store;
pub mod month_grid;
pub mod settings;
pub mod storage;
