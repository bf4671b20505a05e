pub mod commands;
pub mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use larder_core::{Config, OutputFormat};
use larder_taxonomy::{LocalizationStore, TaxonomyRegistry};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "larder",
    version,
    about = "Recipe tag taxonomy: normalize, search and migrate recipe tags",
    long_about = "Larder maps free-text recipe tags onto a hierarchical taxonomy of canonical \
                  ids, ranks tags for search and autocomplete, resolves labels per locale and \
                  migrates legacy tag arrays in recipe records."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to $LARDER_HOME/config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map free-text tags to canonical tag ids
    Normalize(commands::normalize::NormalizeArgs),

    /// Rank tags against a query
    Search(commands::search::SearchArgs),

    /// List the most popular tags
    Popular(commands::search::PopularArgs),

    /// Show where a tag sits in the hierarchy
    Tree(commands::tree::TreeArgs),

    /// Show a tag's label and description in a locale
    Label(commands::label::LabelArgs),

    /// Check a tag set against the taxonomy and tagging rules
    Validate(commands::validate::ValidateArgs),

    /// Dry-run report over the tags of a record file
    Report(commands::report::ReportArgs),

    /// Rewrite the tags of a record file
    Migrate(commands::migrate::MigrateArgs),

    /// List categories with tag counts
    Categories,

    /// Show or create the configuration file
    Config(commands::config::ConfigArgs),
}

/// Everything a command needs: configuration, the built-in taxonomy and the output format
pub struct Context {
    pub config: Config,
    pub registry: TaxonomyRegistry,
    pub format: OutputFormat,
}

impl Context {
    pub fn load(config: Option<&Path>, format: OutputFormat) -> Result<Self> {
        let path = resolve_config_path(config);
        let config = larder_core::load_or_default(&path)?;
        let registry = TaxonomyRegistry::builtin()?;

        tracing::debug!(
            config = %path.display(),
            tags = registry.len(),
            "context loaded"
        );

        Ok(Self {
            config,
            registry,
            format,
        })
    }

    /// Built-in locale tables plus any files in $LARDER_HOME/locales
    pub fn localization(&self) -> Result<LocalizationStore> {
        let mut store = LocalizationStore::builtin(&self.registry)
            .with_default_locale(&self.config.localization.default_locale);
        let loaded = store.load_dir(larder_core::locales_dir())?;
        if loaded > 0 {
            tracing::info!(entries = loaded, "loaded user locale files");
        }
        Ok(store)
    }

    pub fn is_json(&self) -> bool {
        self.format.is_machine_readable()
    }
}

pub fn resolve_config_path(config: Option<&Path>) -> PathBuf {
    match config {
        Some(path) => path.to_path_buf(),
        None => larder_core::config_path(),
    }
}

/// Pretty-print a serializable value as JSON on stdout
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
