//! Configuration types and path resolution for soulclaw.
//!
//! Soulclaw stores its settings as JSON at the platform's config path
//! (e.g. `~/.config/soulclaw/config.json` on Linux). The record is loaded
//! once per invocation and saved back as a whole; there is no field-level
//! persistence.

mod loader;
mod paths;
mod types;

pub use types::Config;
