//! prompt
//!
//! Prompt assembly for every mode.
//!
//! # Modules
//!
//! - [`headers`] - Language-aware preambles for fix / refactor / rewrite
//! - [`builders`] - One builder function per mode
//!
//! # Design
//!
//! Builders are stateless. They read the files they need, combine a
//! preamble, the path, and the literal file text, and return a
//! [`PromptRequest`]. Nothing here talks to the network.

pub mod builders;
pub mod headers;

pub use builders::{
    build_diff, build_edit, build_explain, build_fix, build_folder_analysis, build_generate,
    build_one_shot, build_project_qa, build_refactor, build_rewrite, edit_prompt_text,
    REWRITE_DIRECTIVE,
};
pub use headers::EditMode;

use std::fmt;
use std::path::PathBuf;

/// The operation selected for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    OneShot,
    Explain,
    Fix,
    Refactor,
    Rewrite,
    AnalyzeFolder,
    ProjectQa,
    Diff,
    GenerateFile,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::OneShot => "one-shot",
            Mode::Explain => "explain",
            Mode::Fix => "fix",
            Mode::Refactor => "refactor",
            Mode::Rewrite => "rewrite",
            Mode::AnalyzeFolder => "analyze-folder",
            Mode::ProjectQa => "project-qa",
            Mode::Diff => "diff",
            Mode::GenerateFile => "generate-file",
        };
        f.write_str(name)
    }
}

impl From<EditMode> for Mode {
    fn from(mode: EditMode) -> Self {
        match mode {
            EditMode::Fix => Mode::Fix,
            EditMode::Refactor => Mode::Refactor,
            EditMode::Rewrite => Mode::Rewrite,
        }
    }
}

/// An assembled prompt, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// Mode that produced this prompt
    pub mode: Mode,
    /// Full instruction text
    pub text: String,
    /// Files or folders the prompt was built from
    pub paths: Vec<PathBuf>,
}

impl PromptRequest {
    pub fn new(mode: Mode, text: String, paths: Vec<PathBuf>) -> Self {
        Self { mode, text, paths }
    }
}
