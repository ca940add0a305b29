//! cli
//!
//! Command-line interface layer for codeassist.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Check the API credential before doing any work
//! - Resolve settings from config files and flag overrides
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, builds a
//! [`commands::Context`] and an [`AnthropicClient`], and dispatches. Prompt
//! construction lives in [`crate::prompt`], folder processing in
//! [`crate::batch`].

pub mod args;
pub mod commands;

pub use args::{Action, Cli, Shell};

use std::io;

use anyhow::{anyhow, bail, Context as _, Result};

use crate::auth::ApiKey;
use crate::client::anthropic::AnthropicClient;
use crate::core::config::{schema::validate_temperature, Config, Settings};
use crate::ui::output::{self, Verbosity};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let mut stdout = io::stdout().lock();

    if let Some(shell) = cli.completions {
        return commands::completion(shell, &mut stdout);
    }

    // No network traffic without a credential.
    let api_key =
        ApiKey::from_env().map_err(|e| anyhow!("{}\n{}", e, e.remediation()))?;

    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let loaded = Config::load(Some(&cwd)).context("Failed to load configuration")?;
    if let Some(path) = loaded.config.global_config_loaded_from() {
        output::debug(format!("global config: {}", path.display()), verbosity);
    }
    if let Some(path) = loaded.config.project_config_loaded_from() {
        output::debug(format!("project config: {}", path.display()), verbosity);
    }

    let settings = apply_overrides(loaded.config.settings(), &cli)?;
    let client = AnthropicClient::with_timeout(api_key, &settings.api_base, settings.timeout)?;
    output::debug(format!("api base: {}", client.api_base()), verbosity);

    let ctx = commands::Context {
        verbosity,
        out: cli.out.clone(),
        settings,
    };

    commands::dispatch(cli.action(), &ctx, &client, &mut stdout)
}

/// Apply `--model`, `--max-tokens` and `--temperature` on top of config.
pub fn apply_overrides(mut settings: Settings, cli: &Cli) -> Result<Settings> {
    if let Some(model) = &cli.model {
        if model.trim().is_empty() {
            bail!("--model cannot be empty");
        }
        settings.model = model.clone();
    }
    if let Some(max_tokens) = cli.max_tokens {
        if max_tokens == 0 {
            bail!("--max-tokens must be greater than 0");
        }
        settings.max_tokens = max_tokens;
    }
    if let Some(temperature) = cli.temperature {
        validate_temperature(temperature)?;
        settings.temperature = temperature;
    }
    Ok(settings)
}
