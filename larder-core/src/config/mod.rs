//! Configuration types for Larder

use crate::types::{Category, MigrationStrategy};
use crate::LarderError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub localization: LocalizationConfig,
    #[serde(default)]
    pub migration: MigrationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Result count when the caller does not pass a limit
    #[serde(default = "default_search_limit")]
    pub default_limit: usize,
    /// Requested limits are clamped to this value
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationConfig {
    #[serde(default = "default_min_tags")]
    pub min_tags: usize,
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,
    #[serde(default = "default_required_categories")]
    pub required_categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalizationConfig {
    /// Locale consulted when the requested one has no entry
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MigrationConfig {
    #[serde(default)]
    pub strategy: MigrationStrategy,
    /// Number of sample mappings kept in a migration report
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Record count from which batch migration runs on the rayon pool
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

// Default value functions
fn default_search_limit() -> usize { 20 }
fn default_max_limit() -> usize { 200 }
fn default_min_tags() -> usize { 2 }
fn default_max_tags() -> usize { 8 }
fn default_required_categories() -> Vec<Category> { vec![Category::Difficulty] }
fn default_locale() -> String { "en".to_string() }
fn default_sample_size() -> usize { 10 }
fn default_parallel_threshold() -> usize { 1000 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_search_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_tags: default_min_tags(),
            max_tags: default_max_tags(),
            required_categories: default_required_categories(),
        }
    }
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
        }
    }
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            strategy: MigrationStrategy::default(),
            sample_size: default_sample_size(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, LarderError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| LarderError::Configuration(format!("Failed to parse config: {}", e)))?;
    tracing::debug!(path = %path.as_ref().display(), "loaded configuration");
    Ok(config)
}

/// Load `path` when it exists, otherwise fall back to defaults
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config, LarderError> {
    if path.as_ref().exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.as_ref().display(), "no config file, using defaults");
        Ok(Config::default())
    }
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), LarderError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| LarderError::Configuration(format!("Failed to serialize config: {}", e)))?;
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}
