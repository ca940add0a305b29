//! client::anthropic
//!
//! Completion client for the Anthropic Messages API.
//!
//! # Design
//!
//! Each call is one `POST /v1/messages` with a single user-role message.
//! The first `text` block of the reply is the result; anything else in the
//! reply is ignored. No streaming, no retries.
//!
//! # Errors
//!
//! HTTP statuses map onto [`CompletionError`]:
//! - 401 / 403 -> `AuthFailed`
//! - 429 -> `RateLimited`, keeping the service message
//! - any other non-success -> `ApiError`
//!
//! Transport failures become `NetworkError`; a success body without a text
//! block becomes `MalformedResponse`.
//!
//! # Example
//!
//! ```ignore
//! use codeassist::auth::ApiKey;
//! use codeassist::client::anthropic::AnthropicClient;
//! use codeassist::client::{CompletionClient, CompletionRequest};
//!
//! let client = AnthropicClient::new(ApiKey::from_env()?);
//! let text = client
//!     .complete(&CompletionRequest::new("Say hi", "claude-3-haiku-20240307"))
//!     .await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::traits::{CompletionClient, CompletionError, CompletionRequest};
use crate::auth::ApiKey;
use crate::core::config::DEFAULT_API_BASE;

/// API version header value.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "codeassist-cli";

/// Anthropic Messages API client.
pub struct AnthropicClient {
    /// HTTP client for making requests
    client: Client,
    /// API key sent as `x-api-key`
    api_key: ApiKey,
    /// API base URL (configurable for proxies and tests)
    api_base: String,
}

// Custom Debug to avoid exposing the key
impl std::fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl AnthropicClient {
    /// Create a client against the public API.
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_api_base(api_key, DEFAULT_API_BASE)
    }

    /// Create a client against a custom API base URL.
    pub fn with_api_base(api_key: ApiKey, api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_base: trim_base(api_base.into()),
        }
    }

    /// Create a client with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError` if the HTTP client cannot be constructed.
    pub fn with_timeout(
        api_key: ApiKey,
        api_base: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CompletionError::NetworkError(e.to_string()))?;
        Ok(Self {
            client,
            api_key,
            api_base: trim_base(api_base.into()),
        })
    }

    /// Get the API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.api_base)
    }

    /// Build headers for an API request.
    fn headers(&self) -> Result<HeaderMap, CompletionError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(self.api_key.expose())
            .map_err(|_| CompletionError::AuthFailed("API key is not a valid header".into()))?;
        headers.insert("x-api-key", key);
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        Ok(headers)
    }

    /// Handle an API response, mapping errors appropriately.
    async fn handle_response(&self, response: Response) -> Result<String, CompletionError> {
        let status = response.status();

        if !status.is_success() {
            return Err(self.error_from_response(response, status).await);
        }

        let body: MessagesResponse = response.json().await.map_err(|e| {
            CompletionError::MalformedResponse(format!("failed to parse response: {}", e))
        })?;

        first_text(body)
    }

    /// Map an error response to a `CompletionError`.
    async fn error_from_response(&self, response: Response, status: StatusCode) -> CompletionError {
        let message = match response.json::<ApiErrorResponse>().await {
            Ok(err) => err.error.message,
            Err(_) => "Unknown error".to_string(),
        };

        match status {
            StatusCode::UNAUTHORIZED => CompletionError::AuthFailed(message),
            StatusCode::FORBIDDEN => {
                CompletionError::AuthFailed(format!("Permission denied: {}", message))
            }
            StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited(message),
            _ => CompletionError::ApiError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let body = MessagesBody {
            model: &request.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            messages: vec![MessageParam {
                role: "user",
                content: &request.prompt,
            }],
        };

        let response = self
            .client
            .post(self.messages_url())
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::NetworkError(e.to_string()))?;

        self.handle_response(response).await
    }
}

fn trim_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}

/// Extract the first text block from a reply.
fn first_text(body: MessagesResponse) -> Result<String, CompletionError> {
    body.content
        .into_iter()
        .find_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        })
        .ok_or_else(|| CompletionError::MalformedResponse("response has no text block".into()))
}

// =============================================================================
// API types
// =============================================================================

#[derive(Debug, Serialize)]
struct MessagesBody<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<MessageParam<'a>>,
}

#[derive(Debug, Serialize)]
struct MessageParam<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}
