//! Prompt template loading and placeholder substitution.
//!
//! Templates are plain text files in the prompts directory, one per
//! generation target, using `${name}` placeholders. Substitution is the
//! entire templating language: no conditionals, no loops. Each call
//! re-reads the file from disk; at most four loads happen per run.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Error;

/// Built-in templates written to the prompts directory on first use.
const DEFAULT_TEMPLATES: [(&str, &str); 4] = [
    (
        "soul",
        "Write a SOUL.md file for an AI agent. The soul captures the agent's \
personality, values, and voice.\n\n\
The agent represents: ${who}\n\
Its objective: ${objective}\n\
Its audience: ${audience}\n\
Audience location: ${location}\n\n\
Produce Markdown with sections for Personality, Values, and Voice.\n",
    ),
    (
        "identity",
        "Write an IDENTITY.md file for an AI agent: a concise statement of who \
the agent is and what it represents.\n\n\
The agent represents: ${who}\n\
Its objective: ${objective}\n\
Its audience: ${audience}\n\
Audience location: ${location}\n\n\
Produce Markdown with a Name, Role, and Background section.\n",
    ),
    (
        "goals",
        "Write a GOALS.md file for an AI agent: the concrete outcomes the agent \
works toward and how it measures success.\n\n\
The agent represents: ${who}\n\
Its objective: ${objective}\n\
Its audience: ${audience}\n\
Audience location: ${location}\n\n\
Produce Markdown with a prioritized list of goals and success criteria.\n",
    ),
    (
        "user",
        "Write a USER.md file describing the typical user an AI agent serves: \
their needs, context, and expectations.\n\n\
The agent represents: ${who}\n\
Its objective: ${objective}\n\
Its audience: ${audience}\n\
Audience location: ${location}\n\n\
Produce Markdown with sections for Who They Are, What They Need, and \
How To Address Them.\n",
    ),
];

/// Creates the prompts directory and seeds any missing built-in templates.
///
/// Existing files are never overwritten, so user edits survive.
pub fn ensure_templates(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create prompts directory {}", dir.display()))?;
    for (name, contents) in DEFAULT_TEMPLATES {
        let path = dir.join(format!("{name}.txt"));
        if !path.exists() {
            fs::write(&path, contents)
                .with_context(|| format!("Failed to write template {}", path.display()))?;
        }
    }
    Ok(())
}

/// Loads the named template from `dir` and substitutes `${name}`
/// placeholders with values from `variables`.
///
/// # Errors
///
/// - [`Error::TemplateNotFound`] if `<dir>/<name>.txt` is absent.
/// - [`Error::MissingVariable`] if the template references a name not
///   present in `variables`.
pub fn load(dir: &Path, name: &str, variables: &HashMap<String, String>) -> Result<String, Error> {
    let path = dir.join(format!("{name}.txt"));
    let raw = fs::read_to_string(&path).map_err(|_| Error::TemplateNotFound(path))?;
    substitute(name, &raw, variables)
}

/// Replaces every `${name}` occurrence in `raw`. Text outside
/// placeholders passes through untouched, including lone `$` signs.
fn substitute(
    template: &str,
    raw: &str,
    variables: &HashMap<String, String>,
) -> Result<String, Error> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                let value = variables.get(name).ok_or_else(|| Error::MissingVariable {
                    template: template.to_string(),
                    name: name.to_string(),
                })?;
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated placeholder, keep it literal.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_literally() {
        let result = substitute("t", "Hello ${who}", &vars(&[("who", "Acme")])).unwrap();
        assert_eq!(result, "Hello Acme");
    }

    #[test]
    fn substitutes_every_occurrence() {
        let result = substitute(
            "t",
            "${who} and again ${who}, for ${audience}",
            &vars(&[("who", "Acme"), ("audience", "owners")]),
        )
        .unwrap();
        assert_eq!(result, "Acme and again Acme, for owners");
    }

    #[test]
    fn missing_variable_is_an_error() {
        let err = substitute("soul", "Hello ${missing}", &vars(&[("who", "Acme")])).unwrap_err();
        match err {
            Error::MissingVariable { template, name } => {
                assert_eq!(template, "soul");
                assert_eq!(name, "missing");
            }
            other => panic!("expected MissingVariable, got {other:?}"),
        }
    }

    #[test]
    fn lone_dollar_signs_pass_through() {
        let result = substitute("t", "costs $5, not $$", &vars(&[])).unwrap();
        assert_eq!(result, "costs $5, not $$");
    }

    #[test]
    fn load_missing_template_is_template_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path(), "soul", &vars(&[])).unwrap_err();
        match err {
            Error::TemplateNotFound(path) => {
                assert!(path.ends_with("soul.txt"));
            }
            other => panic!("expected TemplateNotFound, got {other:?}"),
        }
    }

    #[test]
    fn load_rereads_from_disk_each_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("soul.txt");
        std::fs::write(&path, "v1 ${who}").unwrap();
        assert_eq!(load(dir.path(), "soul", &vars(&[("who", "A")])).unwrap(), "v1 A");
        std::fs::write(&path, "v2 ${who}").unwrap();
        assert_eq!(load(dir.path(), "soul", &vars(&[("who", "A")])).unwrap(), "v2 A");
    }

    #[test]
    fn ensure_templates_seeds_all_four_without_clobbering_edits() {
        let dir = tempfile::tempdir().unwrap();
        ensure_templates(dir.path()).unwrap();
        for (_, name) in crate::constants::TARGETS {
            assert!(dir.path().join(format!("{name}.txt")).exists());
        }

        let soul = dir.path().join("soul.txt");
        std::fs::write(&soul, "edited ${who}").unwrap();
        ensure_templates(dir.path()).unwrap();
        assert_eq!(std::fs::read_to_string(&soul).unwrap(), "edited ${who}");
    }

    #[test]
    fn default_templates_render_with_the_standard_variables() {
        let dir = tempfile::tempdir().unwrap();
        ensure_templates(dir.path()).unwrap();
        let variables = vars(&[
            ("who", "Acme Corp"),
            ("objective", "answer calls"),
            ("audience", "small business owners"),
            ("location", "California, USA"),
        ]);
        for (_, template) in crate::constants::TARGETS {
            let rendered = load(dir.path(), template, &variables).unwrap();
            assert!(rendered.contains("Acme Corp"));
            assert!(!rendered.contains("${"));
        }
    }
}
