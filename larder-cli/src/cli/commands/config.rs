use crate::cli::output::*;
use crate::cli::{print_json, resolve_config_path};
use anyhow::Result;
use clap::{Args, Subcommand};
use larder_core::{Config, LarderError, OutputFormat};
use std::path::Path;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration and where it came from
    Show,

    /// Write a configuration file with the default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: ConfigArgs, config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let path = resolve_config_path(config);

    match args.command {
        ConfigCommands::Show => {
            let exists = path.exists();
            let config = larder_core::load_or_default(&path)?;
            if format.is_machine_readable() {
                return print_json(&config);
            }
            section_header("Configuration");
            if exists {
                println!("# {}", path.display());
            } else {
                println!("# {} (not found, using defaults)", path.display());
            }
            print!("{}", toml::to_string_pretty(&config)?);
            section_header("Paths");
            println!("{}", larder_core::describe_paths());
            Ok(())
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(LarderError::Configuration(format!(
                    "{} already exists; pass --force to overwrite",
                    path.display()
                ))
                .into());
            }
            larder_core::save_config(&path, &Config::default())?;
            success(&format!("Wrote default configuration to {}", path.display()));
            Ok(())
        }
    }
}
