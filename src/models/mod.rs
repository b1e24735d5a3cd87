// Module exports for models

pub mod calendar;
pub mod navigation;
pub mod settings;
