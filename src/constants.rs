//! Centralized constants for soulclaw.
//!
//! All magic numbers, default strings, and endpoint URLs live here
//! so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "soulclaw";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.json";

/// Subdirectory of the config dir holding prompt templates.
pub const PROMPTS_DIRNAME: &str = "prompts";

/// System instruction sent with every generation request.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert agent designer. \
Respond ONLY with the requested Markdown content. \
Do not wrap the output in code fences.";

/// Maximum tokens for Claude completions (the Messages API requires it).
pub const MAX_TOKENS: u64 = 4096;

/// Sampling temperature for chat-completions providers.
pub const TEMPERATURE: f64 = 0.7;

// --- Provider defaults ---

/// Default model for OpenAI.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// Default model for Anthropic Claude.
pub const DEFAULT_CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";

/// Default model for xAI Grok.
pub const DEFAULT_GROK_MODEL: &str = "grok-3";

/// Default model for Google Gemini.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

// --- Provider endpoints ---

/// OpenAI chat completions base URL.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Anthropic Messages API base URL.
pub const CLAUDE_BASE_URL: &str = "https://api.anthropic.com";

/// Anthropic API version header value.
pub const CLAUDE_API_VERSION: &str = "2023-06-01";

/// xAI base URL (OpenAI-compatible chat completions).
pub const GROK_BASE_URL: &str = "https://api.x.ai/v1";

/// Google Gemini generateContent base URL.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// --- HTTP timeouts ---

/// Connect timeout for provider requests, in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Total request timeout for provider requests, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

// --- Generation targets ---

/// The four output files and their template names, in generation order.
pub const TARGETS: [(&str, &str); 4] = [
    ("SOUL.md", "soul"),
    ("IDENTITY.md", "identity"),
    ("GOALS.md", "goals"),
    ("USER.md", "user"),
];
