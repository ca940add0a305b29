//! auth::errors
//!
//! Credential error types.
//!
//! # Design
//!
//! Error messages never contain the key itself, only the name of the
//! environment variable it is read from.
//!
//! # Example
//!
//! ```
//! use codeassist::auth::AuthError;
//!
//! let err = AuthError::MissingCredential("ANTHROPIC_API_KEY");
//! assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
//! ```

use thiserror::Error;

/// Errors from credential loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The credential variable is unset or empty.
    #[error("Missing {0} environment variable.")]
    MissingCredential(&'static str),

    /// The credential cannot be sent as an HTTP header value.
    #[error("{0} contains characters that are not valid in an HTTP header")]
    InvalidCredential(&'static str),
}

impl AuthError {
    /// Remediation steps shown to the user alongside the error.
    pub fn remediation(&self) -> String {
        match self {
            AuthError::MissingCredential(var) | AuthError::InvalidCredential(var) => format!(
                "Set it in your shell before running codeassist:\n  \
                 export {var}=\"sk-ant-...\"        (bash/zsh)\n  \
                 setx {var} \"sk-ant-...\"          (PowerShell)"
            ),
        }
    }
}
