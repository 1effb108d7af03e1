use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;

use crate::config::Config;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Print the path of the configuration file
    Path,
    /// Show the effective configuration
    Show,
}

pub fn config_command(args: ConfigCommands, config: &Config) -> Result<()> {
    match args.command {
        ConfigSubcommands::Path => {
            println!("{}", Config::get_config_path()?.display());
        }
        ConfigSubcommands::Show => {
            let path = Config::get_config_path()?;
            let origin = if path.exists() { "file" } else { "defaults" };
            println!("{} {} ({})", "#".dimmed(), path.display().to_string().cyan(), origin.dimmed());
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}
