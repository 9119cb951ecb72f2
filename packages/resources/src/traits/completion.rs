//! Completion trait for the hosted text-generation service.

use async_trait::async_trait;

use crate::error::Result;

/// Chat-completion provider abstraction.
///
/// Implementations wrap a specific hosted service (Perplexity in
/// production) so the parsing pipeline can be exercised in tests
/// without network access. One call is one outbound round-trip; no
/// caching, no retries.
#[async_trait]
pub trait Completion: Send + Sync {
    /// Send a system instruction and a user prompt, returning the first
    /// choice's message content as free-form prose.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String>;
}

#[async_trait]
impl Completion for Box<dyn Completion> {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        (**self).complete(system, prompt).await
    }
}
