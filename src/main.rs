//! Entry point for soulclaw, a CLI that generates Openclaw-compatible
//! agent definition files using a hosted AI provider.
//!
//! This binary loads environment variables, parses CLI arguments via
//! [`cli`], and dispatches to the appropriate subcommand handler.

mod cli;
mod config;
mod constants;
mod error;
mod generate;
mod prompt;
mod provider;
mod wizard;

use anyhow::Result;

/// Runs the soulclaw CLI.
///
/// Loads `.env` files (silently ignored if absent), parses command-line
/// arguments into a [`cli::Cli`] struct, and dispatches the chosen
/// subcommand via [`cli::run`]. At most four provider requests are made
/// per run, sequentially, so a single-threaded runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = cli::parse();
    cli::run(cli).await
}
