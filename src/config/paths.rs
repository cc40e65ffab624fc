//! Platform path resolution for soulclaw configuration and templates.

use anyhow::Result;
use std::path::PathBuf;

use super::types::Config;

impl Config {
    /// Returns the platform-specific configuration directory for soulclaw.
    ///
    /// `~/.config/soulclaw/` on Linux (`XDG_CONFIG_HOME/soulclaw`),
    /// `~/Library/Application Support/soulclaw/` on macOS, roaming
    /// app-data on Windows.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform's config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join(crate::constants::APP_NAME);
        Ok(dir)
    }

    /// Returns the full path to the soulclaw configuration file.
    ///
    /// `~/.config/soulclaw/config.json` on Linux.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(crate::constants::CONFIG_FILENAME))
    }

    /// Returns the prompt templates directory.
    ///
    /// `~/.config/soulclaw/prompts/` on Linux. Seeded with built-in
    /// templates on first use by [`crate::prompt`].
    pub fn prompts_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(crate::constants::PROMPTS_DIRNAME))
    }
}
