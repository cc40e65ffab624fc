//! Provider kind enumeration and the static descriptor table.
//!
//! Defines [`ProviderKind`] which identifies which hosted AI backend to use,
//! plus each provider's display label and default model.

use crate::constants;
use crate::error::Error;

/// Identifies which AI provider to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// OpenAI (GPT models, chat completions API).
    OpenAi,
    /// Anthropic (Claude models, Messages API).
    Claude,
    /// xAI Grok (OpenAI-compatible API).
    Grok,
    /// Google Gemini (generateContent API).
    Gemini,
}

/// All supported providers, in display order.
pub const ALL_PROVIDERS: [ProviderKind; 4] = [
    ProviderKind::OpenAi,
    ProviderKind::Claude,
    ProviderKind::Grok,
    ProviderKind::Gemini,
];

impl ProviderKind {
    /// Parses a provider id string into a [`ProviderKind`].
    ///
    /// Matching is case-insensitive. Returns [`Error::UnknownProvider`]
    /// for ids not in the registry.
    pub fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "claude" => Ok(Self::Claude),
            "grok" => Ok(Self::Grok),
            "gemini" => Ok(Self::Gemini),
            other => Err(Error::UnknownProvider(other.to_string())),
        }
    }

    /// The short id used in config files and CLI flags.
    pub fn id(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Claude => "claude",
            Self::Grok => "grok",
            Self::Gemini => "gemini",
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Claude => "Anthropic Claude",
            Self::Grok => "xAI Grok",
            Self::Gemini => "Google Gemini",
        }
    }

    /// The model used when the config and flags name none.
    pub fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAi => constants::DEFAULT_OPENAI_MODEL,
            Self::Claude => constants::DEFAULT_CLAUDE_MODEL,
            Self::Grok => constants::DEFAULT_GROK_MODEL,
            Self::Gemini => constants::DEFAULT_GEMINI_MODEL,
        }
    }

    /// Environment variable consulted for this provider's API key.
    pub fn api_key_env_var(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Claude => "ANTHROPIC_API_KEY",
            Self::Grok => "XAI_API_KEY",
            Self::Gemini => "GEMINI_API_KEY",
        }
    }
}
