//! Isolated on-disk environments
//!
//! Each environment owns a temporary `LARDER_HOME`. Nothing touches the
//! process environment; pass [`TestEnvironment::envs`] to child processes.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::with_prefix("larder-test")
            .context("Failed to create temporary directory")?;
        std::fs::create_dir_all(temp_dir.path().join("home").join("locales"))?;
        Ok(Self { temp_dir })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory used as `LARDER_HOME`
    pub fn home(&self) -> PathBuf {
        self.root().join("home")
    }

    pub fn config_path(&self) -> PathBuf {
        self.home().join("config.toml")
    }

    pub fn locales_dir(&self) -> PathBuf {
        self.home().join("locales")
    }

    /// Variables that point a child process at this environment
    pub fn envs(&self) -> Vec<(&'static str, PathBuf)> {
        vec![("LARDER_HOME", self.home())]
    }

    /// Write a file relative to the root, creating parent directories
    pub fn write_file(&self, path: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&full_path, content)
            .with_context(|| format!("Failed to write {}", full_path.display()))?;
        Ok(full_path)
    }

    pub fn write_json(&self, path: impl AsRef<Path>, value: &Value) -> Result<PathBuf> {
        self.write_file(path, &serde_json::to_string_pretty(value)?)
    }

    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let full_path = self.root().join(path);
        std::fs::read_to_string(&full_path)
            .with_context(|| format!("Failed to read {}", full_path.display()))
    }

    pub fn read_json(&self, path: impl AsRef<Path>) -> Result<Value> {
        Ok(serde_json::from_str(&self.read_file(path)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_environment_layout() {
        let env = TestEnvironment::new().unwrap();
        assert!(env.locales_dir().is_dir());
        assert_eq!(env.envs()[0].1, env.home());
        assert!(env.config_path().starts_with(env.root()));
    }

    #[test]
    fn test_json_round_trip() {
        let env = TestEnvironment::new().unwrap();
        let value = json!([{ "tags": ["Italian"] }]);
        let path = env.write_json("input/records.json", &value).unwrap();
        assert!(path.exists());
        assert_eq!(env.read_json("input/records.json").unwrap(), value);
    }
}
