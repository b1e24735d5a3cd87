mod app;
pub mod components;
pub mod fonts;
pub mod theme;
pub mod views;

pub use app::{AppConfig, CalendarApp};
