//! cli::commands::folder
//!
//! Folder modes: `--fix-folder`, `--refactor-folder`, `--rewrite-folder`.
//!
//! A missing or non-directory root is reported and the command returns
//! successfully without doing anything.

use std::path::Path;

use anyhow::Result;

use super::Context;
use crate::batch::{self, BatchMode};
use crate::client::CompletionClient;
use crate::ui::output::{self, ConsoleReporter};

/// Run a folder mode with console progress.
pub async fn folder(
    ctx: &Context,
    client: &dyn CompletionClient,
    mode: BatchMode,
    root: &Path,
) -> Result<()> {
    if ctx.out.is_some() {
        output::warn(
            "--out is ignored in folder modes; output goes to the mirrored folder",
            ctx.verbosity,
        );
    }

    let reporter = ConsoleReporter::new(ctx.verbosity);
    batch::process(root, mode, client, &ctx.settings, &reporter).await?;
    Ok(())
}
