//! Widget components for the TUI

pub mod dialog;
pub mod header;
pub mod home_panel;
pub mod log_view;
pub mod modal_overlay;
pub mod settings_panel;
pub mod status_bar;
pub mod tabs;

pub use dialog::DialogWidget;
pub use header::MainHeader;
pub use home_panel::HomePanel;
pub use log_view::LogView;
pub use settings_panel::SettingsPanel;
pub use status_bar::StatusBar;
pub use tabs::AppTabs;
