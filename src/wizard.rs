//! Interactive prompting for the configure wizard and missing generate fields.
//!
//! All terminal interaction goes through dialoguer so prompts get
//! consistent theming, defaults, and validation.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

use crate::config::Config;
use crate::provider::{ProviderKind, ALL_PROVIDERS};

/// Runs the interactive configuration wizard, mutating `config` in memory.
/// The caller persists the result.
pub fn configure(config: &mut Config) -> Result<()> {
    let labels: Vec<&str> = ALL_PROVIDERS.iter().map(|p| p.label()).collect();
    let current_index = config
        .provider
        .as_deref()
        .and_then(|id| ProviderKind::from_str(id).ok())
        .and_then(|kind| ALL_PROVIDERS.iter().position(|p| *p == kind));

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select AI provider")
        .items(&labels)
        .default(current_index.unwrap_or(0))
        .interact()?;
    let provider = ALL_PROVIDERS[selection];
    config.provider = Some(provider.id().to_string());

    let model: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Model name")
        .default(
            config
                .model
                .clone()
                .unwrap_or_else(|| provider.default_model().to_string()),
        )
        .interact_text()?;
    config.model = Some(model);

    let has_key = config.api_key.as_deref().is_some_and(|k| !k.is_empty());
    let prompt = if has_key {
        format!("API key [{}] (empty keeps current)", mask_api_key(config.api_key.as_deref().unwrap_or("")))
    } else {
        "API key".to_string()
    };
    let key = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty_password(has_key)
        .interact()?;
    if !key.is_empty() {
        config.api_key = Some(key);
    }

    Ok(())
}

/// Prompts for a required free-form field; rejects empty input.
pub fn required_input(label: &str) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .validate_with(|s: &String| {
            if s.trim().is_empty() {
                Err("This field is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Masks an API key for display: first 4 + `...` + last 4 characters,
/// or `***` when the key is too short to mask meaningfully.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_keys_show_first_and_last_four() {
        assert_eq!(mask_api_key("sk-ABCDEFGHIJ"), "sk-A...GHIJ");
    }

    #[test]
    fn short_keys_mask_completely() {
        assert_eq!(mask_api_key(""), "***");
        assert_eq!(mask_api_key("sk-12345"), "***"); // exactly 8 chars
        assert_eq!(mask_api_key("abc"), "***");
    }

    #[test]
    fn nine_chars_is_the_masking_threshold() {
        assert_eq!(mask_api_key("123456789"), "1234...6789");
    }
}
