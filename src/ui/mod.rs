//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Tagged status lines, verbosity, progress reporters
//! - [`sink`] - Delivery of model replies to the console or a file
//!
//! # Design
//!
//! Status lines and model output are kept apart: status goes through
//! [`output`], replies go through [`sink`].

pub mod output;
pub mod sink;
