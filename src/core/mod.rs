//! core
//!
//! Core domain types and file handling for codeassist.
//!
//! # Modules
//!
//! - [`language`] - Language classification by file extension
//! - [`files`] - Source file reads and directory enumeration
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Classification is pure and total
//! - Enumeration order is deterministic
//! - Missing files are reported distinctly from other I/O faults

pub mod config;
pub mod files;
pub mod language;
