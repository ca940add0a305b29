//! client
//!
//! Abstraction for the remote completion service.
//!
//! # Architecture
//!
//! The `CompletionClient` trait defines the one operation the rest of the
//! crate needs: text in, text out, or a typed failure. Commands hold a
//! `&dyn CompletionClient` so tests can swap in [`mock::MockClient`].
//!
//! The service is opaque. No retries happen here or anywhere above; a
//! failure is surfaced once and, through [`submit`], turned into the text
//! that gets written in place of a reply.
//!
//! # Modules
//!
//! - `traits`: `CompletionClient` trait, request and result types
//! - [`anthropic`]: Anthropic Messages API implementation
//! - [`mock`]: Mock implementation for deterministic testing

pub mod anthropic;
pub mod mock;
mod traits;

pub use traits::*;
