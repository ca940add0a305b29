//! cli::commands::single
//!
//! Modes that send one prompt and deliver one reply.
//!
//! # Design
//!
//! Every single-reply mode has the same shape: build the prompt, submit it
//! through the fail-soft boundary, hand the text to the output sink. Only
//! the builder differs. A missing input file is an error that ends the run;
//! a failed completion call is not, its sentinel text is delivered like any
//! reply.

use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result};

use super::Context;
use crate::client::{submit, CompletionClient, CompletionRequest};
use crate::prompt::{self, EditMode, PromptRequest};
use crate::ui::{output, sink};

/// One-shot prompt, optionally with an attached file.
pub async fn one_shot(
    ctx: &Context,
    client: &dyn CompletionClient,
    prompt_text: Option<&str>,
    file: Option<&Path>,
    stdout: &mut dyn Write,
) -> Result<()> {
    let request = prompt::build_one_shot(prompt_text, file)?;
    deliver(ctx, client, request, stdout).await
}

/// Explain one file.
pub async fn explain(
    ctx: &Context,
    client: &dyn CompletionClient,
    path: &Path,
    stdout: &mut dyn Write,
) -> Result<()> {
    let request = prompt::build_explain(path)?;
    deliver(ctx, client, request, stdout).await
}

/// Fix, refactor, or rewrite one file.
pub async fn edit(
    ctx: &Context,
    client: &dyn CompletionClient,
    mode: EditMode,
    path: &Path,
    stdout: &mut dyn Write,
) -> Result<()> {
    let request = prompt::build_edit(mode, path)?;
    deliver(ctx, client, request, stdout).await
}

/// Analyze a whole project from its file listing.
pub async fn analyze_folder(
    ctx: &Context,
    client: &dyn CompletionClient,
    root: &Path,
    stdout: &mut dyn Write,
) -> Result<()> {
    let request = prompt::build_folder_analysis(root)?;
    deliver(ctx, client, request, stdout).await
}

/// Answer a question about a project.
pub async fn project_qa(
    ctx: &Context,
    client: &dyn CompletionClient,
    root: &Path,
    question: &str,
    stdout: &mut dyn Write,
) -> Result<()> {
    let request = prompt::build_project_qa(root, question)?;
    deliver(ctx, client, request, stdout).await
}

/// Generate a new file from a specification.
pub async fn generate_file(
    ctx: &Context,
    client: &dyn CompletionClient,
    specification: &str,
    stdout: &mut dyn Write,
) -> Result<()> {
    let request = prompt::build_generate(specification);
    deliver(ctx, client, request, stdout).await
}

/// Compare two files.
pub async fn diff(
    ctx: &Context,
    client: &dyn CompletionClient,
    old: &Path,
    new: &Path,
    stdout: &mut dyn Write,
) -> Result<()> {
    let request = prompt::build_diff(old, new)?;
    deliver(ctx, client, request, stdout).await
}

/// Submit a prompt and send the reply to the sink.
async fn deliver(
    ctx: &Context,
    client: &dyn CompletionClient,
    request: PromptRequest,
    stdout: &mut dyn Write,
) -> Result<()> {
    output::debug(
        format!(
            "mode={} model={} max_tokens={} temperature={} prompt_chars={}",
            request.mode,
            ctx.settings.model,
            ctx.settings.max_tokens,
            ctx.settings.temperature,
            request.text.chars().count()
        ),
        ctx.verbosity,
    );

    let completion = CompletionRequest::from_settings(request.text, &ctx.settings);
    let result = submit(client, &completion).await;
    if !result.is_success() {
        output::debug(format!("{} call failed", client.name()), ctx.verbosity);
    }

    let written = sink::write_output(&result.into_text(), ctx.out.as_deref(), stdout)
        .with_context(|| match &ctx.out {
            Some(path) => format!("Failed to write output to {}", path.display()),
            None => "Failed to write output".to_string(),
        })?;

    if let Some(path) = written {
        output::success(format!("Written to {}", path.display()), ctx.verbosity);
    }

    Ok(())
}
