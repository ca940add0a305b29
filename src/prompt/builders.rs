//! prompt::builders
//!
//! One builder per mode. Each returns a [`PromptRequest`] holding the full
//! instruction text sent as the single user message.
//!
//! Only the rewrite builder constrains the reply format (it demands the
//! file content alone). Every other reply is free text meant for reading,
//! not for writing back over the source.

use std::path::{Path, PathBuf};

use super::headers::{preamble, EditMode};
use super::{Mode, PromptRequest};
use crate::core::files::{self, FileError, SourceFile};

/// Final line of every rewrite prompt.
pub const REWRITE_DIRECTIVE: &str = "Now output ONLY the full rewritten file content.\n";

/// Build the one-shot prompt.
///
/// With an attached file the prompt wraps the file text and the user's
/// request; without one, the user's prompt is sent as is.
pub fn build_one_shot(prompt: Option<&str>, file: Option<&Path>) -> Result<PromptRequest, FileError> {
    let user_prompt = prompt.unwrap_or("");
    match file {
        Some(path) => {
            let text = files::read_text(path)?;
            Ok(PromptRequest::new(
                Mode::OneShot,
                format!(
                    "You are an expert senior software engineer.\n\
                     File: {}\n\n\
                     {}\n\n\
                     User request: {}",
                    path.display(),
                    text,
                    user_prompt
                ),
                vec![path.to_path_buf()],
            ))
        }
        None => Ok(PromptRequest::new(
            Mode::OneShot,
            user_prompt.to_string(),
            Vec::new(),
        )),
    }
}

/// Build the explain prompt for one file.
pub fn build_explain(path: &Path) -> Result<PromptRequest, FileError> {
    let text = files::read_text(path)?;
    Ok(PromptRequest::new(
        Mode::Explain,
        format!(
            "Explain the following file in full detail:\n\
             - overall purpose\n\
             - key functions/classes\n\
             - how data flows\n\
             - important design decisions\n\
             - potential pitfalls\n\n\
             Path: {}\n\n\
             {}",
            path.display(),
            text
        ),
        vec![path.to_path_buf()],
    ))
}

/// Build the fix prompt for one file.
pub fn build_fix(path: &Path) -> Result<PromptRequest, FileError> {
    build_edit(EditMode::Fix, path)
}

/// Build the refactor prompt for one file.
pub fn build_refactor(path: &Path) -> Result<PromptRequest, FileError> {
    build_edit(EditMode::Refactor, path)
}

/// Build the rewrite prompt for one file.
pub fn build_rewrite(path: &Path) -> Result<PromptRequest, FileError> {
    build_edit(EditMode::Rewrite, path)
}

/// Build a file-editing prompt: language preamble, path, delimited content.
pub fn build_edit(mode: EditMode, path: &Path) -> Result<PromptRequest, FileError> {
    let source = files::read_source(path)?;
    Ok(PromptRequest::new(
        Mode::from(mode),
        edit_prompt_text(mode, &source),
        vec![source.path],
    ))
}

/// Assemble the edit prompt text for an already loaded file.
pub fn edit_prompt_text(mode: EditMode, source: &SourceFile) -> String {
    let header = preamble(mode, source.language);
    let path = source.path.display();
    match mode {
        EditMode::Fix | EditMode::Refactor => format!(
            "{header}File path: {path}\n\n\
             Current content:\n\
             ----------------\n\
             {text}\n\
             ----------------\n",
            text = source.text
        ),
        EditMode::Rewrite => format!(
            "{header}Original file path: {path}\n\n\
             Original file content:\n\
             ----------------------\n\
             {text}\n\
             ----------------------\n\
             {REWRITE_DIRECTIVE}",
            text = source.text
        ),
    }
}

/// Build the whole-project analysis prompt.
///
/// The listing names every file under `root`, code or not.
pub fn build_folder_analysis(root: &Path) -> Result<PromptRequest, FileError> {
    let listing = files::render_listing(&files::list_files(root)?);
    Ok(PromptRequest::new(
        Mode::AnalyzeFolder,
        format!(
            "You are a principal-level software architect.\n\
             Analyze the ENTIRE project located at:\n{}\n\n\
             Files included:\n\
             {}\n\n\
             For EVERY important code file, provide:\n\
             - purpose summary\n\
             - logic explanation\n\
             - major bugs or risks\n\
             - inefficiencies\n\
             - weak architecture\n\
             - security issues\n\
             - dead code\n\
             - concrete refactor recommendations\n\n\
             Then propose:\n\
             - improved folder structure\n\
             - improved module boundaries\n\
             - improved architecture\n\
             - cleanup and modernization plan\n",
            root.display(),
            listing
        ),
        vec![root.to_path_buf()],
    ))
}

/// Build the project question-answering prompt.
pub fn build_project_qa(root: &Path, question: &str) -> Result<PromptRequest, FileError> {
    let listing = files::render_listing(&files::list_files(root)?);
    Ok(PromptRequest::new(
        Mode::ProjectQa,
        format!(
            "You are an expert senior engineer. Answer questions about this codebase.\n\n\
             Project root: {}\n\n\
             Files:\n{}\n\n\
             User question:\n{}",
            root.display(),
            listing,
            question
        ),
        vec![root.to_path_buf()],
    ))
}

/// Build the two-file comparison prompt.
///
/// The diff itself is produced by the model.
pub fn build_diff(old: &Path, new: &Path) -> Result<PromptRequest, FileError> {
    let text_a = files::read_text(old)?;
    let text_b = files::read_text(new)?;
    Ok(PromptRequest::new(
        Mode::Diff,
        format!(
            "You are an expert senior engineer. Compare the following two files.\n\
             Provide:\n\
             - a unified diff\n\
             - summary of functional changes\n\
             - improvements introduced\n\
             - potential regressions\n\
             - style / architecture changes\n\
             - recommendations for further improvements\n\n\
             File A: {}\n{}\n\n\
             File B: {}\n{}\n\n\
             Now produce the full analysis.",
            old.display(),
            text_a,
            new.display(),
            text_b
        ),
        vec![old.to_path_buf(), new.to_path_buf()],
    ))
}

/// Build the file generation prompt from a free-text specification.
pub fn build_generate(specification: &str) -> PromptRequest {
    PromptRequest::new(
        Mode::GenerateFile,
        format!(
            "Generate the requested file. Output ONLY valid file content.\n\n\
             User specification:\n{}",
            specification
        ),
        Vec::<PathBuf>::new(),
    )
}
