//! Error taxonomy for soulclaw.
//!
//! Resolution errors ([`Error::MissingProvider`], [`Error::UnknownProvider`],
//! [`Error::MissingApiKey`]) are fatal before any generation starts. Per-target
//! errors ([`Error::TemplateNotFound`], [`Error::MissingVariable`],
//! [`Error::GenerationFailed`]) are caught by the orchestrator and reported
//! without aborting the remaining targets.

use std::path::PathBuf;

/// All failure modes soulclaw distinguishes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No provider on the command line and none in the stored config.
    #[error(
        "no AI provider configured. Run `soulclaw configure` first or pass --provider"
    )]
    MissingProvider,

    /// A provider id that is not in the registry.
    #[error("unknown provider '{0}'. Supported: openai, claude, grok, gemini")]
    UnknownProvider(String),

    /// No API key on the command line, in the environment, or in the stored config.
    #[error("no API key configured. Run `soulclaw configure` first or pass --api-key")]
    MissingApiKey,

    /// A prompt template file is absent from the templates directory.
    #[error("prompt template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// A template references a `${name}` with no matching variable.
    #[error("template '{template}' references unknown variable '${{{name}}}'")]
    MissingVariable { template: String, name: String },

    /// A provider call failed (transport, auth, or provider-side error).
    #[error("generation failed: {0}")]
    GenerationFailed(String),

    /// The configuration file could not be written.
    #[error("failed to save configuration: {0}")]
    PersistFailed(#[source] std::io::Error),
}
