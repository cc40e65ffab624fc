//! AI provider abstraction for soulclaw.
//!
//! [`ProviderKind`] is the closed registry of supported backends (OpenAI,
//! Claude, Grok, Gemini), [`resolve`] computes the effective
//! (provider, model, key) triple from flags, environment, and stored
//! config, and [`Provider`] routes a generation request to the matching
//! HTTP adapter.

mod client;
mod kind;
mod resolve;

pub use client::Provider;
pub use kind::{ProviderKind, ALL_PROVIDERS};
pub use resolve::{resolve, Resolved};
