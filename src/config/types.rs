//! Struct definition and serde defaults for soulclaw configuration.

use serde::{Deserialize, Serialize};

/// Persisted configuration, stored as JSON at `config.json` in the
/// platform config directory.
///
/// All fields are optional so a missing config file deserializes to an
/// empty record and the CLI can fall back to flags and provider defaults.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Provider id (`"openai"`, `"claude"`, `"grok"`, `"gemini"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Model identifier, overriding the provider's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// API key for the selected provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}
