use anyhow::Result;
use clap::Parser;
use log::info;

use loan_wizard::cli::commands::{config_command, offers_command, run_command};
use loan_wizard::cli::{Cli, Commands};
use loan_wizard::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("loan-wizard.log")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting loan-wizard");

    let config = Config::load()?;

    match cli.command {
        Some(Commands::Run(args)) => run_command(args, config).await,
        Some(Commands::Offers(args)) => offers_command(args),
        Some(Commands::Config(args)) => config_command(args, &config),
        None => run_command(cli.run, config).await,
    }
}
