//! Generation orchestrator.
//!
//! Walks the fixed list of four output targets in order. Each target is
//! independent: its template is rendered, dispatched to the provider, and
//! written to the output directory, and a failure is recorded against that
//! target alone — the remaining targets still run.

use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::constants::TARGETS;
use crate::error::Error;
use crate::prompt;
use crate::provider::Provider;

/// The user-supplied facts substituted into every template.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub who: String,
    pub objective: String,
    pub audience: String,
    pub location: String,
}

impl GenerationRequest {
    /// The substitution variables exposed to templates.
    fn variables(&self) -> HashMap<String, String> {
        HashMap::from([
            ("who".to_string(), self.who.clone()),
            ("objective".to_string(), self.objective.clone()),
            ("audience".to_string(), self.audience.clone()),
            ("location".to_string(), self.location.clone()),
        ])
    }
}

/// Outcome for a single output target.
#[derive(Debug)]
pub enum TargetOutcome {
    /// The file was generated and written to this path.
    Written(PathBuf),
    /// The target failed; the reason is kept for the summary.
    Failed(String),
}

/// Per-target outcomes for one generation run, in generation order.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub outcomes: Vec<(&'static str, TargetOutcome)>,
}

impl GenerationReport {
    /// Names of targets that failed, in order.
    pub fn failed_targets(&self) -> Vec<&'static str> {
        self.outcomes
            .iter()
            .filter_map(|(name, outcome)| match outcome {
                TargetOutcome::Failed(_) => Some(*name),
                TargetOutcome::Written(_) => None,
            })
            .collect()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed_targets().is_empty()
    }
}

/// Generates all four target files into `output_dir`.
///
/// Creates `output_dir` (with parents) before any writes. Per-target
/// failures are recorded in the report and never abort the remaining
/// targets; only a failure to create the output directory is fatal.
pub async fn generate(
    request: &GenerationRequest,
    provider: &Provider,
    prompts_dir: &Path,
    output_dir: &Path,
) -> Result<GenerationReport> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory {}", output_dir.display())
    })?;

    let variables = request.variables();
    let mut report = GenerationReport::default();

    for (filename, template) in TARGETS {
        print!("Generating {filename} ... ");
        let _ = std::io::stdout().flush();

        match run_target(template, &variables, provider, prompts_dir, output_dir, filename).await {
            Ok(path) => {
                println!("{}  -> {}", "OK".green().bold(), path.display());
                report.outcomes.push((filename, TargetOutcome::Written(path)));
            }
            Err(err) => {
                println!("{}\n  Error: {err}", "FAILED".red().bold());
                report
                    .outcomes
                    .push((filename, TargetOutcome::Failed(err.to_string())));
            }
        }
    }

    Ok(report)
}

/// Renders, dispatches, and writes one target.
async fn run_target(
    template: &str,
    variables: &HashMap<String, String>,
    provider: &Provider,
    prompts_dir: &Path,
    output_dir: &Path,
    filename: &str,
) -> Result<PathBuf, Error> {
    let rendered = prompt::load(prompts_dir, template, variables)?;
    let content = provider.generate(&rendered).await?;
    let path = output_dir.join(filename);
    fs::write(&path, format!("{content}\n"))
        .map_err(|e| Error::GenerationFailed(format!("failed to write {}: {e}", path.display())))?;
    Ok(path)
}
