//! client::traits
//!
//! Completion client trait and the fail-soft submission boundary.
//!
//! # Design
//!
//! [`CompletionClient`] is async because completion calls involve network
//! I/O. Implementations return typed errors; callers that must not abort
//! (folder modes in particular) go through [`submit`], which folds every
//! failure into [`CompletionResult::Failure`].
//!
//! # Example
//!
//! ```
//! use codeassist::client::mock::MockClient;
//! use codeassist::client::{submit, CompletionRequest, CompletionResult};
//!
//! # tokio_test::block_on(async {
//! let client = MockClient::replying("OK");
//! let request = CompletionRequest::new("Explain this", "claude-test");
//! let result = submit(&client, &request).await;
//! assert_eq!(result, CompletionResult::Success("OK".to_string()));
//! # });
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::core::config::{Settings, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

/// Prefix of the sentinel text written in place of a failed response.
pub const ERROR_SENTINEL_PREFIX: &str = "[API ERROR]";

/// Errors from completion calls.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompletionError {
    /// The API rejected the credential.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// Rate limit exceeded.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The response parsed but held no usable text.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// One request to the completion service.
///
/// Always a single user-role message; no history is carried.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The assembled instruction text
    pub prompt: String,
    /// Maximum output tokens
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Model identifier
    pub model: String,
}

impl CompletionRequest {
    /// Create a request with default sampling settings.
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            model: model.into(),
        }
    }

    /// Create a request using resolved settings.
    pub fn from_settings(prompt: impl Into<String>, settings: &Settings) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            model: settings.model.clone(),
        }
    }

    /// Override the output token limit.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Outcome of a fail-soft submission.
///
/// Both variants carry text destined for the same sink. Keeping them apart
/// lets callers count failures without changing what gets written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    /// The model's reply.
    Success(String),
    /// Description of the failure.
    Failure(String),
}

impl CompletionResult {
    /// Check if the call succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, CompletionResult::Success(_))
    }

    /// Text to write: the reply, or the error sentinel.
    pub fn into_text(self) -> String {
        match self {
            CompletionResult::Success(text) => text,
            CompletionResult::Failure(message) => {
                format!("{} {}", ERROR_SENTINEL_PREFIX, message)
            }
        }
    }
}

/// The completion client trait.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`.
///
/// # Error Handling
///
/// `complete` returns typed errors. There is no retry at any layer; a
/// failed call is reported once.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Get the client name (e.g., "anthropic", "mock").
    fn name(&self) -> &'static str;

    /// Send one request and return the first text block of the reply.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

/// Submit a request, converting any failure into [`CompletionResult::Failure`].
///
/// Never returns an error, so one bad call cannot abort a folder run.
pub async fn submit(client: &dyn CompletionClient, request: &CompletionRequest) -> CompletionResult {
    match client.complete(request).await {
        Ok(text) => CompletionResult::Success(text),
        Err(e) => CompletionResult::Failure(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_renders_sentinel() {
        let result = CompletionResult::Failure("rate limited".to_string());
        assert!(!result.is_success());
        assert_eq!(result.into_text(), "[API ERROR] rate limited");
    }

    #[test]
    fn success_renders_verbatim() {
        let result = CompletionResult::Success("  fn main() {}\n".to_string());
        assert!(result.is_success());
        assert_eq!(result.into_text(), "  fn main() {}\n");
    }

    #[test]
    fn request_builder_overrides() {
        let request = CompletionRequest::new("p", "m")
            .with_max_tokens(10)
            .with_temperature(0.9);
        assert_eq!(request.max_tokens, 10);
        assert_eq!(request.temperature, 0.9);
        assert_eq!(request.model, "m");
    }

    #[test]
    fn request_from_settings() {
        let settings = Settings {
            model: "claude-custom".to_string(),
            max_tokens: 512,
            temperature: 0.3,
            ..Default::default()
        };
        let request = CompletionRequest::from_settings("p", &settings);
        assert_eq!(request.model, "claude-custom");
        assert_eq!(request.max_tokens, 512);
        assert_eq!(request.temperature, 0.3);
    }

    #[test]
    fn request_defaults() {
        let request = CompletionRequest::new("p", "m");
        assert_eq!(request.max_tokens, 4096);
        assert_eq!(request.temperature, 0.1);
    }

    #[test]
    fn error_display() {
        let err = CompletionError::ApiError {
            status: 500,
            message: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 500 - overloaded");
    }
}
