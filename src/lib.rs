//! codeassist - send source files and prompts to a language model
//!
//! codeassist is a single-binary tool for asking a hosted model about code:
//! one-shot questions, explaining, fixing, refactoring, or rewriting a file,
//! analyzing a project, comparing two files, generating a file from a
//! description, and processing whole folders into mirrored output trees.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, resolves the mode)
//! - [`prompt`] - Builds the prompt text for each mode
//! - [`client`] - Completion client abstraction (Anthropic Messages API, mock)
//! - [`batch`] - Folder modes: discover, submit, and mirror every file
//! - [`core`] - Language classification, file access, configuration
//! - [`auth`] - API credential handling
//! - [`ui`] - Console logging and the output sink
//!
//! # Failure Model
//!
//! 1. A missing credential stops the run before any request is sent
//! 2. A missing input file is an error for single-file modes
//! 3. A failed completion call never aborts a run; its error text is
//!    delivered in place of the reply
//! 4. Folder modes never modify the source folder

pub mod auth;
pub mod batch;
pub mod cli;
pub mod client;
pub mod core;
pub mod prompt;
pub mod ui;
