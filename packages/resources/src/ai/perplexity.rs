//! Perplexity implementation of the Completion trait.
//!
//! The production provider: Perplexity's online "sonar" models perform
//! the web search and this library parses the returned prose.
//!
//! # Example
//!
//! ```rust,ignore
//! use resources::{ai::Perplexity, ResourceSearch};
//!
//! let search = ResourceSearch::new(Perplexity::from_env()?);
//! let found = search.search("Brisbane").await?;
//! ```

use async_trait::async_trait;
use perplexity_client::{ChatRequest, Message, PerplexityClient, PerplexityError, DEFAULT_MODEL};

use crate::error::{ResourceError, Result};
use crate::pipeline::ResourceSearch;
use crate::traits::completion::Completion;

/// Perplexity-backed completion provider.
///
/// Uses low-temperature, non-streaming, recency-filtered settings
/// suited to factual local-resource lookups.
#[derive(Clone)]
pub struct Perplexity {
    client: PerplexityClient,
    model: String,
}

impl Perplexity {
    /// Create a new provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: PerplexityClient::new(api_key),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create from environment variable `PERPLEXITY_API_KEY`.
    ///
    /// Fails with a configuration error when the credential is unset,
    /// before any network call could be attempted.
    pub fn from_env() -> Result<Self> {
        let client = PerplexityClient::from_env()?;
        Ok(Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Set the chat model (default: llama-3.1-sonar-small-128k-online).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl From<PerplexityError> for ResourceError {
    fn from(err: PerplexityError) -> Self {
        match err {
            PerplexityError::Config(msg) => ResourceError::Config(msg),
            PerplexityError::Network(msg) => ResourceError::Network(msg),
            PerplexityError::Api { status, body } => ResourceError::Service { status, body },
            PerplexityError::Parse(msg) => ResourceError::Response(msg),
        }
    }
}

#[async_trait]
impl Completion for Perplexity {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(&self.model)
            .message(Message::system(system))
            .message(Message::user(prompt))
            .temperature(0.2)
            .top_p(0.9)
            .search_domain_filter(vec![])
            .return_images(false)
            .return_related_questions(false)
            .search_recency_filter("month")
            .top_k(0)
            .stream(false)
            .presence_penalty(0.0)
            .frequency_penalty(1.0);

        let response = self.client.chat_completion(request).await?;
        Ok(response.content)
    }
}

impl ResourceSearch<Perplexity> {
    /// Create a production search from `PERPLEXITY_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Perplexity::from_env()?))
    }
}
