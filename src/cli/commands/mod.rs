pub mod config;
pub mod offers;
pub mod tui;

pub use config::config_command;
pub use offers::offers_command;
pub use tui::run_command;
