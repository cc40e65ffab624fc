//! Effective configuration resolution.
//!
//! Merges CLI-flag overrides over the stored config, applying the
//! three-tier precedence for every field: explicit flag > persisted
//! config > provider default. The API key has an extra environment tier
//! (`OPENAI_API_KEY` etc.) between flag and stored config.
//!
//! Resolution is pure over its inputs plus the environment: no network
//! or disk side effects.

use super::kind::ProviderKind;
use crate::config::Config;
use crate::error::Error;

/// Resolved (provider, model, key) triple, ready for dispatch.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub kind: ProviderKind,
    pub model: String,
    pub api_key: String,
}

/// Resolve which provider, model, and API key to use.
///
/// # Errors
///
/// - [`Error::MissingProvider`] if no provider is given anywhere.
/// - [`Error::UnknownProvider`] if the effective provider id is not in
///   the registry, regardless of the other fields.
/// - [`Error::MissingApiKey`] if no non-empty key is given anywhere.
pub fn resolve(
    flag_provider: Option<&str>,
    flag_model: Option<&str>,
    flag_api_key: Option<&str>,
    stored: &Config,
) -> Result<Resolved, Error> {
    resolve_with_env(flag_provider, flag_model, flag_api_key, stored, |var| {
        std::env::var(var).ok()
    })
}

/// [`resolve`] with an injectable environment lookup, so the precedence
/// chain is testable without mutating process state.
fn resolve_with_env(
    flag_provider: Option<&str>,
    flag_model: Option<&str>,
    flag_api_key: Option<&str>,
    stored: &Config,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Resolved, Error> {
    let provider_id = non_empty(flag_provider)
        .or_else(|| non_empty(stored.provider.as_deref()))
        .ok_or(Error::MissingProvider)?;
    let kind = ProviderKind::from_str(provider_id)?;

    let model = non_empty(flag_model)
        .map(String::from)
        .or_else(|| stored.model.clone().filter(|m| !m.is_empty()))
        .unwrap_or_else(|| kind.default_model().to_string());

    let api_key = non_empty(flag_api_key)
        .map(String::from)
        .or_else(|| env(kind.api_key_env_var()).filter(|k| !k.is_empty()))
        .or_else(|| stored.api_key.clone().filter(|k| !k.is_empty()))
        .ok_or(Error::MissingApiKey)?;

    Ok(Resolved {
        kind,
        model,
        api_key,
    })
}

/// Treats empty strings the same as absent values.
fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
