use super::commands::config::ConfigCommands;
use super::commands::offers::OffersArgs;
use super::commands::tui::RunArgs;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "loan-wizard")]
#[command(about = "A terminal loan application wizard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive wizard (default)
    Run(RunArgs),
    /// Print the loan tier menu with interest and repayment
    Offers(OffersArgs),
    /// Inspect the configuration file
    Config(ConfigCommands),
}
