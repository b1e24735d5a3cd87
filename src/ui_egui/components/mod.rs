pub mod bottom_navigation;
pub mod bottom_panel;
pub mod header;

pub use bottom_navigation::BottomNavigation;
pub use bottom_panel::{BottomPanel, PanelAction, SelectedDateLabel};
pub use header::{Header, HeaderControl};
