//! ui::output
//!
//! Console status output.
//!
//! # Design
//!
//! Status lines carry a bracketed tag (`[INFO]`, `[OK]`, `[WARN]`,
//! `[ERROR]`, `[DONE]`, `[debug]`) and respect the verbosity flags. Model
//! output is not routed through here; it goes to the output sink.
//!
//! Long-running operations report through the [`Reporter`] trait so tests
//! can capture progress instead of printing it.

use std::fmt::Display;
use std::sync::{Arc, Mutex};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - errors only
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print an informational message (respects quiet mode).
pub fn info(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("[INFO] {}", message);
    }
}

/// Print a success message (respects quiet mode).
pub fn success(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("[OK] {}", message);
    }
}

/// Print a completion summary (respects quiet mode).
pub fn done(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("[DONE] {}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("[WARN] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("[ERROR] {}", message);
}

/// Sink for progress and status lines of a long-running operation.
pub trait Reporter {
    fn info(&self, message: &str);
    fn ok(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn done(&self, message: &str);
}

/// Reporter that prints to the console.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    verbosity: Verbosity,
}

impl ConsoleReporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        info(message, self.verbosity);
    }

    fn ok(&self, message: &str) {
        success(message, self.verbosity);
    }

    fn warn(&self, message: &str) {
        warn(message, self.verbosity);
    }

    fn error(&self, message: &str) {
        error(message);
    }

    fn done(&self, message: &str) {
        done(message, self.verbosity);
    }
}

/// Reporter that records tagged lines in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, each prefixed with its tag.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    fn push(&self, tag: &str, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("[{}] {}", tag, message));
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.push("INFO", message);
    }

    fn ok(&self, message: &str) {
        self.push("OK", message);
    }

    fn warn(&self, message: &str) {
        self.push("WARN", message);
    }

    fn error(&self, message: &str) {
        self.push("ERROR", message);
    }

    fn done(&self, message: &str) {
        self.push("DONE", message);
    }
}
