//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the resource
//! search pipeline without making real completion or network calls.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::{ResourceError, Result};
use crate::traits::completion::Completion;

/// A mock completion provider for testing.
///
/// Returns a canned prose response without network access, and records
/// every prompt it receives for assertions. Cloning shares state, so a
/// clone kept outside the pipeline can inspect calls made through it.
#[derive(Default, Clone)]
pub struct MockCompletion {
    /// Canned prose returned for every call
    response: Arc<RwLock<String>>,

    /// When set, every call fails with this mode instead
    failure: Arc<RwLock<Option<MockFailure>>>,

    /// Calls received, in order
    calls: Arc<RwLock<Vec<MockCall>>>,
}

/// Record of a call made to the mock.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub system: String,
    pub prompt: String,
}

/// Failure modes the mock can simulate.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Missing credential
    Config,
    /// Non-2xx response from the completion endpoint
    Service { status: u16, body: String },
    /// Transport failure
    Network,
}

impl MockCompletion {
    /// Create a new mock that returns an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canned prose response.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        *self.response.write().unwrap() = content.into();
        self
    }

    /// Make every call fail with the given failure mode.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        *self.failure.write().unwrap() = Some(failure);
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl Completion for MockCompletion {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        self.calls.write().unwrap().push(MockCall {
            system: system.to_string(),
            prompt: prompt.to_string(),
        });

        if let Some(failure) = self.failure.read().unwrap().clone() {
            return Err(match failure {
                MockFailure::Config => {
                    ResourceError::Config("PERPLEXITY_API_KEY not set".into())
                }
                MockFailure::Service { status, body } => {
                    ResourceError::Service { status, body }
                }
                MockFailure::Network => {
                    ResourceError::Network("mock connection refused".into())
                }
            });
        }

        Ok(self.response.read().unwrap().clone())
    }
}
