//! batch
//!
//! Folder modes: apply one prompt template to every supported file under a
//! root and write each reply into a mirrored output tree.
//!
//! # Algorithm
//!
//! ```text
//! validate root -> discover supported files (sorted) -> for each file:
//!     mirror path under output root -> create parents -> build prompt
//!     -> submit -> write reply verbatim -> report progress
//! -> report summary
//! ```
//!
//! # Invariants
//!
//! - Every supported file under the root yields exactly one output file at
//!   the same relative path under the output root
//! - Unsupported files are skipped silently
//! - A failed completion call is written as the file's content (the error
//!   sentinel); it never stops the run
//! - Files are processed one at a time, in lexicographic order
//! - Output is never read back; a rerun overwrites earlier output
//!
//! # Example
//!
//! ```no_run
//! use codeassist::batch::{self, BatchMode};
//! use codeassist::client::mock::MockClient;
//! use codeassist::core::config::Settings;
//! use codeassist::ui::output::RecordingReporter;
//! use std::path::Path;
//!
//! # tokio_test::block_on(async {
//! let client = MockClient::replying("// fixed");
//! let reporter = RecordingReporter::new();
//! let summary = batch::process(
//!     Path::new("my_project"),
//!     BatchMode::Fix,
//!     &client,
//!     &Settings::default(),
//!     &reporter,
//! )
//! .await
//! .unwrap();
//! # });
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::client::{submit, CompletionClient, CompletionRequest};
use crate::core::config::Settings;
use crate::core::files::{self, FileError};
use crate::prompt::{self, PromptRequest};
use crate::ui::output::Reporter;
use crate::ui::sink;

/// Prefix of the text written when a discovered file cannot be read.
pub const READ_ERROR_PREFIX: &str = "[READ ERROR]";

/// Function that turns one source file into a prompt.
pub type PromptBuilder = fn(&Path) -> Result<PromptRequest, FileError>;

/// Errors that stop a folder run.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Discover(#[from] FileError),

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The folder modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    Fix,
    Refactor,
    Rewrite,
}

impl BatchMode {
    /// Suffix appended to the root's name to form the output root.
    pub fn suffix(&self) -> &'static str {
        match self {
            BatchMode::Fix => "_fixed",
            BatchMode::Refactor => "_refactored",
            BatchMode::Rewrite => "_rewritten",
        }
    }

    /// The prompt builder for this mode.
    pub fn prompt_builder(&self) -> PromptBuilder {
        match self {
            BatchMode::Fix => prompt::build_fix,
            BatchMode::Refactor => prompt::build_refactor,
            BatchMode::Rewrite => prompt::build_rewrite,
        }
    }

    fn verb_ing(&self) -> &'static str {
        match self {
            BatchMode::Fix => "Fixing",
            BatchMode::Refactor => "Refactoring",
            BatchMode::Rewrite => "REWRITING",
        }
    }

    fn verb_past(&self) -> &'static str {
        match self {
            BatchMode::Fix => "Fixed",
            BatchMode::Refactor => "Refactored",
            BatchMode::Rewrite => "Rewrote",
        }
    }

    fn warning(&self) -> Option<&'static str> {
        match self {
            BatchMode::Rewrite => {
                Some("This is an aggressive mode. Resulting code may not be drop-in compatible.")
            }
            BatchMode::Fix | BatchMode::Refactor => None,
        }
    }
}

/// A discovered folder job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    /// Input root
    pub root: PathBuf,
    /// Sibling output root
    pub output_root: PathBuf,
    /// Supported files, relative to `root`, in processing order
    pub files: Vec<PathBuf>,
}

impl BatchJob {
    /// Discover the supported files under `root`.
    pub fn discover(root: &Path, suffix: &str) -> Result<Self, FileError> {
        Ok(Self {
            root: root.to_path_buf(),
            output_root: output_root(root, suffix),
            files: files::discover_supported(root)?,
        })
    }

    /// Source path for a relative file.
    pub fn source(&self, rel: &Path) -> PathBuf {
        self.root.join(rel)
    }

    /// Destination path for a relative file.
    pub fn destination(&self, rel: &Path) -> PathBuf {
        self.output_root.join(rel)
    }
}

/// Outcome of a completed folder run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub output_root: PathBuf,
    /// Files written, sentinels included
    pub processed: usize,
    /// Files whose content is an error sentinel
    pub failed: usize,
}

/// Derive the output root: the root's sibling named `<name><suffix>`.
///
/// A root without a final name component (`.` or `..`) is resolved first so
/// the output lands next to the directory it names.
pub fn output_root(root: &Path, suffix: &str) -> PathBuf {
    let base = if root.file_name().is_some() {
        root.to_path_buf()
    } else {
        root.canonicalize().unwrap_or_else(|_| root.to_path_buf())
    };

    match base.file_name() {
        Some(name) => {
            let mut renamed = OsString::from(name);
            renamed.push(suffix);
            base.with_file_name(renamed)
        }
        None => base.join(suffix.trim_start_matches('_')),
    }
}

/// Run a folder mode over `root`.
///
/// Returns `Ok(None)` without side effects when `root` is missing or not a
/// directory; the problem is reported, not raised.
pub async fn process(
    root: &Path,
    mode: BatchMode,
    client: &dyn CompletionClient,
    settings: &Settings,
    reporter: &dyn Reporter,
) -> Result<Option<BatchSummary>, BatchError> {
    if !root.is_dir() {
        reporter.error(&format!(
            "Folder not found or not a directory: {}",
            root.display()
        ));
        return Ok(None);
    }

    let job = BatchJob::discover(root, mode.suffix())?;

    reporter.info(&format!(
        "{} all supported code files in: {}",
        mode.verb_ing(),
        job.root.display()
    ));
    reporter.info(&format!("Output folder: {}", job.output_root.display()));
    if let Some(warning) = mode.warning() {
        reporter.warn(warning);
    }

    let summary = run_job(
        &job,
        mode.prompt_builder(),
        mode.verb_past(),
        client,
        settings,
        reporter,
    )
    .await?;

    reporter.done(&format!(
        "{} {} file(s). Output project folder: {}",
        mode.verb_past(),
        summary.processed,
        summary.output_root.display()
    ));
    if summary.failed > 0 {
        reporter.warn(&format!(
            "{} of {} file(s) contain an error message instead of a model reply",
            summary.failed, summary.processed
        ));
    }

    Ok(Some(summary))
}

/// Process every file of a discovered job with the given prompt builder.
pub async fn run_job(
    job: &BatchJob,
    build: PromptBuilder,
    verb: &str,
    client: &dyn CompletionClient,
    settings: &Settings,
    reporter: &dyn Reporter,
) -> Result<BatchSummary, BatchError> {
    let mut processed = 0;
    let mut failed = 0;

    for rel in &job.files {
        let src = job.source(rel);
        let dst = job.destination(rel);

        let text = match build(&src) {
            Ok(request) => {
                let request = CompletionRequest::from_settings(request.text, settings);
                let result = submit(client, &request).await;
                if !result.is_success() {
                    failed += 1;
                }
                result.into_text()
            }
            Err(e) => {
                failed += 1;
                format!("{} {}", READ_ERROR_PREFIX, e)
            }
        };

        sink::write_file(&dst, &text).map_err(|source| BatchError::Write {
            path: dst.clone(),
            source,
        })?;

        reporter.ok(&format!("{} {} -> {}", verb, src.display(), dst.display()));
        processed += 1;
    }

    Ok(BatchSummary {
        output_root: job.output_root.clone(),
        processed,
        failed,
    })
}
