//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$CODEASSIST_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/codeassist/config.toml`
//! 3. `~/.codeassist/config.toml`
//!
//! # Project Config
//!
//! Located at `.codeassist.toml` in the working directory. Uses the same
//! schema as the global file and overrides it key by key.
//!
//! # Validation
//!
//! Values are validated after parsing so a bad file fails at startup, not
//! halfway through a folder run.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Contents of a config file (global or project scope).
///
/// # Example
///
/// ```toml
/// model = "claude-3-haiku-20240307"
/// max_tokens = 4096
/// temperature = 0.1
/// api_base = "https://api.anthropic.com"
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Model identifier sent with every request
    pub model: Option<String>,

    /// Default maximum output tokens
    pub max_tokens: Option<u32>,

    /// Default sampling temperature
    pub temperature: Option<f32>,

    /// Base URL of the completion API
    pub api_base: Option<String>,

    /// HTTP request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(model) = &self.model {
            if model.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "model cannot be empty".to_string(),
                ));
            }
        }

        if self.max_tokens == Some(0) {
            return Err(ConfigError::InvalidValue(
                "max_tokens must be greater than zero".to_string(),
            ));
        }

        if let Some(temperature) = self.temperature {
            validate_temperature(temperature)?;
        }

        if let Some(api_base) = &self.api_base {
            if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid api_base '{}', must start with http:// or https://",
                    api_base
                )));
            }
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Check that a temperature is within the range the API accepts.
pub fn validate_temperature(temperature: f32) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&temperature) {
        return Err(ConfigError::InvalidValue(format!(
            "invalid temperature {}, must be between 0.0 and 1.0",
            temperature
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FileConfig::default();
        assert!(config.model.is_none());
        assert!(config.max_tokens.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_model_rejected() {
        let config = FileConfig {
            model: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_max_tokens_rejected() {
        let config = FileConfig {
            max_tokens: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn temperature_out_of_range_rejected() {
        let config = FileConfig {
            temperature: Some(1.5),
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(validate_temperature(0.0).is_ok());
        assert!(validate_temperature(1.0).is_ok());
        assert!(validate_temperature(-0.1).is_err());
    }

    #[test]
    fn api_base_needs_scheme() {
        let config = FileConfig {
            api_base: Some("api.anthropic.com".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn roundtrip() {
        let config = FileConfig {
            model: Some("claude-3-haiku-20240307".to_string()),
            max_tokens: Some(2048),
            temperature: Some(0.5),
            api_base: Some("http://localhost:8080".to_string()),
            timeout_secs: Some(30),
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: FileConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("modle = \"typo\"\n");
        assert!(result.is_err());
    }
}
