pub mod cli;
pub mod config;
pub mod loan;
pub mod tui;
