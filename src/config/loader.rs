//! File loading and saving for soulclaw configuration.
//!
//! The config is read and written as a whole record. Loading never fails
//! on a missing file; saving writes to a temp file in the same directory
//! and renames it over the target so a crash cannot leave a half-written
//! config behind.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::Config;
use crate::error::Error;

impl Config {
    /// Loads the stored configuration from the platform config path.
    ///
    /// Returns an empty record if no config file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from an explicit path.
    pub(crate) fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Persists the whole configuration record to the platform config path.
    ///
    /// Creates the config directory if absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PersistFailed`] on any I/O failure.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(())
    }

    /// Persists the configuration to an explicit path.
    pub(crate) fn save_to(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(Error::PersistFailed)?;
        }
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::PersistFailed(std::io::Error::other(e)))?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &contents).map_err(Error::PersistFailed)?;
        fs::rename(&tmp, path).map_err(Error::PersistFailed)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_returns_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config {
            provider: Some("claude".into()),
            model: Some("claude-sonnet-4-20250514".into()),
            api_key: Some("sk-ant-test".into()),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn save_then_load_round_trips_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.json");
        Config::default().save_to(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_overwrites_whole_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config {
            provider: Some("openai".into()),
            model: Some("gpt-4o".into()),
            api_key: Some("sk-old".into()),
        }
        .save_to(&path)
        .unwrap();
        // A record with fewer fields must not inherit the old ones.
        Config {
            provider: Some("grok".into()),
            model: None,
            api_key: None,
        }
        .save_to(&path)
        .unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.provider.as_deref(), Some("grok"));
        assert_eq!(loaded.model, None);
        assert_eq!(loaded.api_key, None);
    }
}
