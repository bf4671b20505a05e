//! Test utilities for the Larder workspace
//!
//! Shared fixtures (a small deterministic taxonomy, legacy tag corpora),
//! custom assertions and isolated on-disk environments for CLI tests.

pub mod assertions;
pub mod environment;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::{assert_canonical_format, assert_no_duplicates, assert_registered};
pub use environment::TestEnvironment;
pub use fixtures::{
    fixture_registry, fixture_store, generate_tag_lists, legacy_record_values, legacy_tag_corpus,
};

// Re-export test dependencies for convenience
pub use anyhow::{Context, Result};
pub use tempfile;

/// Initialize test logging (call once per test module); honours `LARDER_LOG`
pub fn init_test_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("LARDER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
