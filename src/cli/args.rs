//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Modes
//!
//! Mode flags are not declared as conflicting. When several are given, the
//! first present in this order wins:
//!
//! `--explain`, `--fix`, `--refactor`, `--rewrite`, `--analyze-folder`,
//! `--project-qa` (only together with `--question`), `--generate-file`,
//! `--diff`, `--fix-folder`, `--refactor-folder`, `--rewrite-folder`.
//!
//! With none of them, the positional prompt is sent as a one-shot request.

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::batch::BatchMode;
use crate::prompt::EditMode;

/// codeassist - send source files and prompts to a language model
#[derive(Parser, Debug)]
#[command(name = "codeassist")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Ask a question
    codeassist \"How do I read a file line by line in Go?\"

    # Ask about a specific file
    codeassist -f src/main.py \"Why is this slow?\"

    # Fix one file and save the result
    codeassist --fix src/main.py --out fixed/main.py

    # Refactor every supported file under src/ into src_refactored/
    codeassist --refactor-folder src

    # Ask a question about a project
    codeassist --project-qa . --question \"Where is the config parsed?\"")]
pub struct Cli {
    /// Prompt for one-shot mode
    pub prompt: Option<String>,

    /// Attach a file for context (one-shot mode)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Explain a file
    #[arg(long, value_name = "PATH")]
    pub explain: Option<PathBuf>,

    /// Fix a file
    #[arg(long, value_name = "PATH")]
    pub fix: Option<PathBuf>,

    /// Refactor a file
    #[arg(long, value_name = "PATH")]
    pub refactor: Option<PathBuf>,

    /// Aggressively rewrite a file
    #[arg(long, value_name = "PATH")]
    pub rewrite: Option<PathBuf>,

    /// Full project analysis
    #[arg(long, value_name = "DIR")]
    pub analyze_folder: Option<PathBuf>,

    /// Ask a question about a project (requires --question)
    #[arg(long, value_name = "DIR")]
    pub project_qa: Option<PathBuf>,

    /// Question for project QA mode
    #[arg(long)]
    pub question: Option<String>,

    /// Description of a new file to generate
    #[arg(long, value_name = "DESCRIPTION")]
    pub generate_file: Option<String>,

    /// Compare two files and explain all differences
    #[arg(long, num_args = 2, value_names = ["FILE_OLD", "FILE_NEW"])]
    pub diff: Option<Vec<PathBuf>>,

    /// Fix all supported code files in a folder into <folder>_fixed
    #[arg(long, value_name = "DIR")]
    pub fix_folder: Option<PathBuf>,

    /// Refactor all supported code files in a folder into <folder>_refactored
    #[arg(long, value_name = "DIR")]
    pub refactor_folder: Option<PathBuf>,

    /// Aggressively rewrite all supported code files in a folder into <folder>_rewritten
    #[arg(long, value_name = "DIR")]
    pub rewrite_folder: Option<PathBuf>,

    /// Write output to a file instead of the console
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Maximum output tokens [default: 4096]
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Sampling temperature [default: 0.1]
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Minimal output: errors and model replies only
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// The operation selected by the flags.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    OneShot {
        prompt: Option<String>,
        file: Option<PathBuf>,
    },
    Explain(PathBuf),
    Edit {
        mode: EditMode,
        path: PathBuf,
    },
    AnalyzeFolder(PathBuf),
    ProjectQa {
        root: PathBuf,
        question: String,
    },
    GenerateFile(String),
    Diff {
        old: PathBuf,
        new: PathBuf,
    },
    Folder {
        mode: BatchMode,
        root: PathBuf,
    },
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Resolve the mode flags to one action, first match wins.
    pub fn action(&self) -> Action {
        if let Some(path) = &self.explain {
            return Action::Explain(path.clone());
        }
        if let Some(path) = &self.fix {
            return edit(EditMode::Fix, path);
        }
        if let Some(path) = &self.refactor {
            return edit(EditMode::Refactor, path);
        }
        if let Some(path) = &self.rewrite {
            return edit(EditMode::Rewrite, path);
        }
        if let Some(root) = &self.analyze_folder {
            return Action::AnalyzeFolder(root.clone());
        }
        if let (Some(root), Some(question)) = (&self.project_qa, &self.question) {
            return Action::ProjectQa {
                root: root.clone(),
                question: question.clone(),
            };
        }
        if let Some(description) = &self.generate_file {
            return Action::GenerateFile(description.clone());
        }
        if let Some([old, new]) = self.diff.as_deref() {
            return Action::Diff {
                old: old.clone(),
                new: new.clone(),
            };
        }
        if let Some(root) = &self.fix_folder {
            return folder(BatchMode::Fix, root);
        }
        if let Some(root) = &self.refactor_folder {
            return folder(BatchMode::Refactor, root);
        }
        if let Some(root) = &self.rewrite_folder {
            return folder(BatchMode::Rewrite, root);
        }
        Action::OneShot {
            prompt: self.prompt.clone(),
            file: self.file.clone(),
        }
    }
}

fn edit(mode: EditMode, path: &Path) -> Action {
    Action::Edit {
        mode,
        path: path.to_path_buf(),
    }
}

fn folder(mode: BatchMode, root: &Path) -> Action {
    Action::Folder {
        mode,
        root: root.to_path_buf(),
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
