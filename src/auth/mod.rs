//! auth - API credential loading
//!
//! The completion API key is read once at startup from the
//! `ANTHROPIC_API_KEY` environment variable and never mutated afterwards.
//!
//! # Security
//!
//! The key must never appear in:
//! - console output (including `--debug`)
//! - error messages
//! - `Debug` output
//!
//! [`ApiKey`] implements a redacting `Debug` and exposes the raw value only
//! through [`ApiKey::expose`], which the HTTP client uses to build headers.
//!
//! # Example
//!
//! ```
//! use codeassist::auth::{ApiKey, AuthError};
//!
//! let key = ApiKey::from_value(Some("sk-ant-test".to_string())).unwrap();
//! assert!(!format!("{:?}", key).contains("sk-ant-test"));
//!
//! let missing = ApiKey::from_value(None).unwrap_err();
//! assert!(matches!(missing, AuthError::MissingCredential(_)));
//! ```

mod errors;

pub use errors::AuthError;

use std::fmt;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// The completion API key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Load the key from [`API_KEY_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredential`] if the variable is unset or
    /// blank.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_value(std::env::var(API_KEY_ENV).ok())
    }

    /// Build a key from an optional raw value.
    pub fn from_value(value: Option<String>) -> Result<Self, AuthError> {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(AuthError::MissingCredential(API_KEY_ENV))?;

        if value.chars().any(|c| c.is_control()) {
            return Err(AuthError::InvalidCredential(API_KEY_ENV));
        }

        Ok(Self(value))
    }

    /// The raw key, for request headers only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Custom Debug to avoid exposing the key
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_value_is_missing() {
        assert_eq!(
            ApiKey::from_value(Some("   ".to_string())),
            Err(AuthError::MissingCredential(API_KEY_ENV))
        );
    }

    #[test]
    fn value_is_trimmed() {
        let key = ApiKey::from_value(Some(" sk-ant-abc\n".to_string())).unwrap();
        assert_eq!(key.expose(), "sk-ant-abc");
    }

    #[test]
    fn control_characters_rejected() {
        assert_eq!(
            ApiKey::from_value(Some("sk\u{7}ant".to_string())),
            Err(AuthError::InvalidCredential(API_KEY_ENV))
        );
    }

    #[test]
    fn debug_output_redacts_key() {
        let key = ApiKey::from_value(Some("sk-ant-secret".to_string())).unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains("sk-ant-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
