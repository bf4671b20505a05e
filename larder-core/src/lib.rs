//! Core utilities and types shared across all Larder crates

pub mod config;
pub mod error;
pub mod system;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, load_or_default, save_config, Config};
pub use error::{LarderError, LarderResult, TaxonomyError};

// Re-export core types
pub use types::{Category, MatchType, MigrationStrategy, NormalizationResult, OutputFormat, TagId};

// Re-export system utilities
pub use system::{config_path, describe_paths, larder_home, locales_dir};

/// Version information for the Larder project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
