//! Command-line interface definition and dispatch for soulclaw.
//!
//! Uses [`clap`] for argument parsing with derive macros. Each subcommand
//! is routed to its handler: `configure` runs the interactive wizard,
//! `show-config` prints the stored configuration with the API key masked,
//! and `generate` produces the four agent definition files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::Config;
use crate::generate::{generate, GenerationRequest};
use crate::provider::{self, Provider, ProviderKind};
use crate::{prompt, wizard};

/// Top-level CLI structure for soulclaw.
#[derive(Parser)]
#[command(
    name = "soulclaw",
    about = "Generate Openclaw-compatible agent definition files using AI",
    after_help = "examples:
  soulclaw configure                Set up AI provider and API key
  soulclaw show-config              Display current configuration
  soulclaw generate                 Interactive generation
  soulclaw generate --who \"Acme Corp, a SaaS company\" \\
      --objective \"Answer customer support calls\" \\
      --audience \"Small business owners\" \\
      --location \"California, USA\" \\
      --output-dir ./agent"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the soulclaw CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Interactively configure the AI provider, model, and API key
    Configure,
    /// Display the current stored configuration
    ShowConfig,
    /// Generate SOUL.md, IDENTITY.md, GOALS.md, and USER.md
    Generate {
        /// Who the agent represents (name of business/person and what it does)
        #[arg(long)]
        who: Option<String>,
        /// What this agent is going to do (e.g. answer calls for my business)
        #[arg(long)]
        objective: Option<String>,
        /// Describe the target audience (e.g. university professors, firefighters)
        #[arg(long)]
        audience: Option<String>,
        /// Where the target audience is located, including region (e.g. Maryland, USA)
        #[arg(long)]
        location: Option<String>,
        /// Directory to write generated files to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
        /// Override the configured AI provider (openai, claude, grok, gemini)
        #[arg(long)]
        provider: Option<String>,
        /// Override the configured model name
        #[arg(long)]
        model: Option<String>,
        /// Override the configured API key
        #[arg(long)]
        api_key: Option<String>,
        /// Directory holding the prompt templates (default: config dir)
        #[arg(long)]
        prompts_dir: Option<PathBuf>,
    },
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Configure => run_configure(),
        Commands::ShowConfig => run_show_config(),
        Commands::Generate {
            who,
            objective,
            audience,
            location,
            output_dir,
            provider,
            model,
            api_key,
            prompts_dir,
        } => {
            run_generate(
                who, objective, audience, location, output_dir, provider, model, api_key,
                prompts_dir,
            )
            .await
        }
    }
}

/// Handles `soulclaw configure`.
fn run_configure() -> Result<()> {
    let mut config = Config::load()?;

    println!();
    println!("{}", "=== SoulClaw Configuration ===".bold());
    println!();

    wizard::configure(&mut config)?;
    config.save()?;

    println!();
    println!("Configuration saved to {}", Config::config_path()?.display());
    println!("Done! You can now run `soulclaw generate` to create agent files.");
    Ok(())
}

/// Handles `soulclaw show-config`.
fn run_show_config() -> Result<()> {
    let config = Config::load()?;
    if config == Config::default() {
        println!("No configuration found. Run `soulclaw configure` to set one up.");
        return Ok(());
    }

    let provider_display = config
        .provider
        .as_deref()
        .map(|id| match ProviderKind::from_str(id) {
            Ok(kind) => kind.label().to_string(),
            Err(_) => id.to_string(),
        })
        .unwrap_or_else(|| "N/A".to_string());

    println!();
    println!("{}", "=== Current Configuration ===".bold());
    println!();
    println!("  Provider : {provider_display}");
    println!("  Model    : {}", config.model.as_deref().unwrap_or("N/A"));
    println!(
        "  API Key  : {}",
        wizard::mask_api_key(config.api_key.as_deref().unwrap_or(""))
    );
    println!("  File     : {}", Config::config_path()?.display());
    Ok(())
}

/// Handles `soulclaw generate`.
///
/// Resolution failures (missing provider, unknown provider, missing API
/// key) abort before any generation attempt. Per-target failures are
/// reported and do not affect the exit code.
#[allow(clippy::too_many_arguments)]
async fn run_generate(
    who: Option<String>,
    objective: Option<String>,
    audience: Option<String>,
    location: Option<String>,
    output_dir: PathBuf,
    flag_provider: Option<String>,
    flag_model: Option<String>,
    flag_api_key: Option<String>,
    prompts_dir: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load()?;
    let resolved = provider::resolve(
        flag_provider.as_deref(),
        flag_model.as_deref(),
        flag_api_key.as_deref(),
        &config,
    )?;

    let request = GenerationRequest {
        who: or_prompt(who, "Who does the agent represent? (name & what it does)")?,
        objective: or_prompt(objective, "What is the agent going to do?")?,
        audience: or_prompt(audience, "Describe the target audience")?,
        location: or_prompt(location, "Where is the target audience located? (include region)")?,
    };

    let prompts_dir = match prompts_dir {
        Some(dir) => dir,
        None => Config::prompts_dir()?,
    };
    prompt::ensure_templates(&prompts_dir)?;

    println!();
    println!(
        "Using provider: {}  |  model: {}",
        resolved.kind.label().cyan().bold(),
        resolved.model.yellow(),
    );
    println!("Output directory: {}", output_dir.display());
    println!();

    let client = Provider::from_resolved(&resolved);
    let report = generate(&request, &client, &prompts_dir, &output_dir).await?;

    println!();
    if report.all_succeeded() {
        println!("{}", "All files generated successfully!".green().bold());
    } else {
        println!(
            "{} {}",
            "Some targets failed:".red().bold(),
            report.failed_targets().join(", "),
        );
    }
    Ok(())
}

/// Uses the flag value when present, otherwise asks interactively.
fn or_prompt(flag: Option<String>, label: &str) -> Result<String> {
    match flag {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => wizard::required_input(label),
    }
}
