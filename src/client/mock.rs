//! client::mock
//!
//! Mock completion client for deterministic testing.
//!
//! # Design
//!
//! The mock returns a fixed reply (or a fixed error) for every request and
//! records each request it receives, so tests can assert on the prompts a
//! command produced without touching the network.
//!
//! # Example
//!
//! ```
//! use codeassist::client::mock::MockClient;
//! use codeassist::client::{CompletionClient, CompletionError, CompletionRequest};
//!
//! # tokio_test::block_on(async {
//! let client = MockClient::replying("OK");
//! let reply = client.complete(&CompletionRequest::new("hi", "m")).await.unwrap();
//! assert_eq!(reply, "OK");
//! assert_eq!(client.requests().len(), 1);
//!
//! let failing = MockClient::failing(CompletionError::RateLimited("slow down".into()));
//! assert!(failing.complete(&CompletionRequest::new("hi", "m")).await.is_err());
//! # });
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::traits::{CompletionClient, CompletionError, CompletionRequest};

/// Mock completion client for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone)]
pub struct MockClient {
    inner: Arc<Mutex<MockClientInner>>,
}

#[derive(Debug)]
struct MockClientInner {
    /// What every call returns.
    reply: Result<String, CompletionError>,
    /// Recorded requests, in call order.
    requests: Vec<CompletionRequest>,
}

impl MockClient {
    /// Create a mock that answers every request with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_result(Ok(reply.into()))
    }

    /// Create a mock that fails every request with `error`.
    pub fn failing(error: CompletionError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(reply: Result<String, CompletionError>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockClientInner {
                reply,
                requests: Vec::new(),
            })),
        }
    }

    /// Get all recorded requests.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        let inner = self.inner.lock().unwrap();
        inner.requests.clone()
    }

    /// Get the recorded prompts.
    pub fn prompts(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.prompt).collect()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.requests.len()
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::replying("")
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request.clone());
        inner.reply.clone()
    }
}
