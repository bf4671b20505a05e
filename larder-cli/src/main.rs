use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands, Context};
use larder_core::{LarderError, TaxonomyError};

fn main() {
    let cli = Cli::parse();

    // LARDER_LOG wins over --verbose; RUST_LOG wins over both
    let log_level = std::env::var("LARDER_LOG").unwrap_or_else(|_| {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<LarderError>() {
            Some(LarderError::Configuration(_)) => 2,
            Some(LarderError::Io(_)) => 3,
            Some(LarderError::Serialization(_)) => 4,
            Some(LarderError::Taxonomy(_)) => 5,
            _ if e.downcast_ref::<TaxonomyError>().is_some() => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    use crate::cli::commands::*;

    // `config` never needs the taxonomy
    let load = || Context::load(cli.config.as_deref(), cli.format);

    match cli.command {
        Commands::Normalize(args) => normalize::run(args, &load()?),
        Commands::Search(args) => search::run(args, &load()?),
        Commands::Popular(args) => search::popular(args, &load()?),
        Commands::Tree(args) => tree::run(args, &load()?),
        Commands::Label(args) => label::run(args, &load()?),
        Commands::Validate(args) => validate::run(args, &load()?),
        Commands::Report(args) => report::run(args, &load()?),
        Commands::Migrate(args) => migrate::run(args, &load()?),
        Commands::Categories => categories::run(&load()?),
        Commands::Config(args) => config::run(args, cli.config.as_deref(), cli.format),
    }
}
