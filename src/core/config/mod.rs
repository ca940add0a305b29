//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! codeassist has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: `.codeassist.toml` in the working directory
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. `CODEASSIST_API_BASE` environment variable (API base only)
//! 5. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$CODEASSIST_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/codeassist/config.toml`
//! 3. `~/.codeassist/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use codeassist::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("."))).unwrap();
//! let settings = result.config.settings();
//! println!("Model: {}", settings.model);
//! ```

pub mod schema;

pub use schema::FileConfig;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";

/// Default maximum output tokens per request.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

/// Default completion API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.anthropic.com";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".codeassist.toml";

/// Environment variable overriding the API base URL.
pub const API_BASE_ENV: &str = "CODEASSIST_API_BASE";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
}

/// Merged configuration from all sources.
///
/// Accessor methods apply precedence rules. Project config overrides
/// global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: FileConfig,
    /// Project configuration (if present)
    pub project: Option<FileConfig>,
    /// API base from the environment, if set
    api_base_env: Option<String>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the project config file (if loaded)
    project_path: Option<PathBuf>,
}

/// Fully resolved request settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `project_dir` is provided, also loads `.codeassist.toml` from it.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or hold
    /// invalid values. Missing config files are not an error.
    pub fn load(project_dir: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let global_path = Self::find_global();
        let mut result = Self::load_from(global_path.as_deref(), project_dir)?;
        result.config.api_base_env = std::env::var(API_BASE_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        Ok(result)
    }

    /// Load configuration from explicit locations, ignoring the environment.
    pub fn load_from(
        global_path: Option<&Path>,
        project_dir: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let (global, global_path) = match global_path {
            Some(path) if path.exists() => (Self::read_config(path)?, Some(path.to_path_buf())),
            _ => (FileConfig::default(), None),
        };

        let (project, project_path) = match project_dir {
            Some(dir) => {
                let path = dir.join(PROJECT_CONFIG_FILE);
                if path.exists() {
                    (Some(Self::read_config(&path)?), Some(path))
                } else {
                    (None, None)
                }
            }
            None => (None, None),
        };

        global.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        Ok(ConfigLoadResult {
            config: Config {
                global,
                project,
                api_base_env: None,
                global_path,
                project_path,
            },
        })
    }

    /// Locate the global config file, if one exists.
    fn find_global() -> Option<PathBuf> {
        // 1. Check $CODEASSIST_CONFIG
        if let Ok(path) = std::env::var("CODEASSIST_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/codeassist/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("codeassist/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.codeassist/config.toml
        dirs::home_dir()
            .map(|home| home.join(".codeassist/config.toml"))
            .filter(|path| path.exists())
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Pick a value from project config first, then global config.
    fn pick<T>(&self, field: impl Fn(&FileConfig) -> Option<T>) -> Option<T> {
        self.project
            .as_ref()
            .and_then(&field)
            .or_else(|| field(&self.global))
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Model identifier. Defaults to [`DEFAULT_MODEL`].
    pub fn model(&self) -> String {
        self.pick(|c| c.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    /// Maximum output tokens. Defaults to [`DEFAULT_MAX_TOKENS`].
    pub fn max_tokens(&self) -> u32 {
        self.pick(|c| c.max_tokens).unwrap_or(DEFAULT_MAX_TOKENS)
    }

    /// Sampling temperature. Defaults to [`DEFAULT_TEMPERATURE`].
    pub fn temperature(&self) -> f32 {
        self.pick(|c| c.temperature).unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// API base URL, with the environment override taking precedence.
    pub fn api_base(&self) -> String {
        self.api_base_env
            .clone()
            .or_else(|| self.pick(|c| c.api_base.clone()))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    /// HTTP request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.pick(|c| c.timeout_secs).unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Resolve all request settings.
    pub fn settings(&self) -> Settings {
        Settings {
            model: self.model(),
            max_tokens: self.max_tokens(),
            temperature: self.temperature(),
            api_base: self.api_base(),
            timeout: self.timeout(),
        }
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded project config file.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_empty_defaults() {
        let dir = TempDir::new().unwrap();
        let result = Config::load_from(None, Some(dir.path())).unwrap();
        let settings = result.config.settings();

        assert_eq!(settings, Settings::default());
        assert!(result.config.global_config_loaded_from().is_none());
        assert!(result.config.project_config_loaded_from().is_none());
    }

    #[test]
    fn load_global_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "model = \"claude-test\"\nmax_tokens = 100\n").unwrap();

        let result = Config::load_from(Some(&path), None).unwrap();
        let config = result.config;

        assert_eq!(config.model(), "claude-test");
        assert_eq!(config.max_tokens(), 100);
        assert_eq!(config.temperature(), DEFAULT_TEMPERATURE);
        assert_eq!(config.global_config_loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn precedence_project_overrides_global() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        fs::write(&global, "model = \"global-model\"\ntemperature = 0.7\n").unwrap();
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "model = \"project-model\"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&global), Some(dir.path()))
            .unwrap()
            .config;

        assert_eq!(config.model(), "project-model");
        // Not set in project, falls through to global
        assert_eq!(config.temperature(), 0.7);
    }

    #[test]
    fn invalid_value_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "temperature = 3.0\n").unwrap();

        let err = Config::load_from(None, Some(dir.path())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "model = [\n").unwrap();

        let err = Config::load_from(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn env_api_base_wins() {
        let config = Config {
            project: Some(FileConfig {
                api_base: Some("https://project.example".to_string()),
                ..Default::default()
            }),
            api_base_env: Some("http://127.0.0.1:9999".to_string()),
            ..Default::default()
        };
        assert_eq!(config.api_base(), "http://127.0.0.1:9999");
    }
}
