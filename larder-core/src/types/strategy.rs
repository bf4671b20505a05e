/// Legacy tag migration strategies
use serde::{Deserialize, Serialize};
use std::fmt;

/// How legacy tag arrays are rewritten during a migration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum MigrationStrategy {
    /// Replace legacy strings with canonical ids
    #[default]
    NewOnly,
    /// Keep each canonical id followed by the legacy string it came from
    Dual,
    /// Pass legacy strings through untouched (rollback)
    LegacyOnly,
}

impl MigrationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewOnly => "new-only",
            Self::Dual => "dual",
            Self::LegacyOnly => "legacy-only",
        }
    }
}

impl fmt::Display for MigrationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MigrationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "new-only" | "new" => Ok(Self::NewOnly),
            "dual" => Ok(Self::Dual),
            "legacy-only" | "legacy" => Ok(Self::LegacyOnly),
            _ => Err(format!("Unknown migration strategy: {}", s)),
        }
    }
}
