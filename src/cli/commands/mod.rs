//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each handler:
//! 1. Builds the prompt for its mode (or discovers files for folder modes)
//! 2. Submits it through [`crate::client::submit`]
//! 3. Delivers the reply through [`crate::ui::sink`]
//!
//! # Async Commands
//!
//! The completion client is async. [`dispatch`] is a synchronous wrapper
//! that owns a tokio runtime and blocks on the selected handler.

mod completion;
mod folder;
mod single;

pub use completion::completion;
pub use folder::folder;
pub use single::{analyze_folder, diff, edit, explain, generate_file, one_shot, project_qa};

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use crate::cli::args::Action;
use crate::client::CompletionClient;
use crate::core::config::Settings;
use crate::ui::output::Verbosity;

/// Per-run state shared by all handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Console verbosity.
    pub verbosity: Verbosity,
    /// `--out` destination for single-reply modes.
    pub out: Option<PathBuf>,
    /// Effective model and sampling settings.
    pub settings: Settings,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            out: None,
            settings: Settings::default(),
        }
    }
}

/// Dispatch an action to its handler.
///
/// This is a synchronous wrapper that uses tokio to run the async implementation.
pub fn dispatch(
    action: Action,
    ctx: &Context,
    client: &dyn CompletionClient,
    stdout: &mut dyn Write,
) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(dispatch_async(action, ctx, client, stdout))
}

/// Async implementation of dispatch.
pub async fn dispatch_async(
    action: Action,
    ctx: &Context,
    client: &dyn CompletionClient,
    stdout: &mut dyn Write,
) -> Result<()> {
    match action {
        Action::OneShot { prompt, file } => {
            one_shot(ctx, client, prompt.as_deref(), file.as_deref(), stdout).await
        }
        Action::Explain(path) => explain(ctx, client, &path, stdout).await,
        Action::Edit { mode, path } => edit(ctx, client, mode, &path, stdout).await,
        Action::AnalyzeFolder(root) => analyze_folder(ctx, client, &root, stdout).await,
        Action::ProjectQa { root, question } => {
            project_qa(ctx, client, &root, &question, stdout).await
        }
        Action::GenerateFile(specification) => {
            generate_file(ctx, client, &specification, stdout).await
        }
        Action::Diff { old, new } => diff(ctx, client, &old, &new, stdout).await,
        Action::Folder { mode, root } => folder(ctx, client, mode, &root).await,
    }
}
