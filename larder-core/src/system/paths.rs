use std::path::PathBuf;
use std::sync::OnceLock;

// Cache the paths to avoid repeated environment lookups
static LARDER_HOME: OnceLock<PathBuf> = OnceLock::new();
static LARDER_CONFIG: OnceLock<PathBuf> = OnceLock::new();

/// Get the Larder home directory
/// Checks LARDER_HOME environment variable, falls back to ${HOME}/.larder
pub fn larder_home() -> PathBuf {
    LARDER_HOME
        .get_or_init(|| {
            if let Ok(path) = std::env::var("LARDER_HOME") {
                PathBuf::from(path)
            } else {
                let home = std::env::var("HOME").unwrap_or_else(|_| {
                    std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
                });
                PathBuf::from(home).join(".larder")
            }
        })
        .clone()
}

/// Get the configuration file path
/// Checks LARDER_CONFIG environment variable, falls back to LARDER_HOME/config.toml
pub fn config_path() -> PathBuf {
    LARDER_CONFIG
        .get_or_init(|| {
            if let Ok(path) = std::env::var("LARDER_CONFIG") {
                PathBuf::from(path)
            } else {
                larder_home().join("config.toml")
            }
        })
        .clone()
}

/// Directory holding extra locale files (LARDER_HOME/locales)
pub fn locales_dir() -> PathBuf {
    larder_home().join("locales")
}

/// Check if running with a custom home directory
pub fn is_custom_home() -> bool {
    std::env::var("LARDER_HOME").is_ok()
}

/// Get a human-readable description of the current path configuration
pub fn describe_paths() -> String {
    format!(
        "Larder Paths:\n  \
        Home: {}\n  \
        Config: {}\n  \
        Locales: {}\n  \
        Custom: {}",
        larder_home().display(),
        config_path().display(),
        locales_dir().display(),
        if is_custom_home() {
            "Yes"
        } else {
            "No (using defaults)"
        }
    )
}
