pub mod destination_page;
pub mod month_grid;

pub use destination_page::PageAction;
pub use month_grid::{grid_dates, MonthGrid};
