//! Pure Perplexity REST API client
//!
//! A clean, minimal client for the Perplexity chat completions API with no
//! domain-specific logic. Perplexity's endpoint is OpenAI-shaped, with extra
//! web-search parameters (recency filter, domain filter, related questions).
//!
//! # Example
//!
//! ```rust,ignore
//! use perplexity_client::{PerplexityClient, ChatRequest, Message};
//!
//! let client = PerplexityClient::from_env()?;
//!
//! let response = client.chat_completion(ChatRequest {
//!     model: "llama-3.1-sonar-small-128k-online".into(),
//!     messages: vec![Message::user("Hello!")],
//!     ..Default::default()
//! }).await?;
//!
//! println!("{}", response.content);
//! ```

pub mod error;
pub mod types;

pub use error::{PerplexityError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Pure Perplexity API client.
#[derive(Clone)]
pub struct PerplexityClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl PerplexityClient {
    /// Create a new Perplexity client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.perplexity.ai".to_string(),
        }
    }

    /// Create from environment variable `PERPLEXITY_API_KEY`.
    ///
    /// An unset or empty variable is a configuration error; no network
    /// call is ever attempted without a credential.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("PERPLEXITY_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| PerplexityError::Config("PERPLEXITY_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    ///
    /// Send messages to the chat completions API and get a response.
    /// Only the first choice's message content is returned; citations and
    /// other response fields are ignored.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Perplexity request failed");
                PerplexityError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Perplexity API error");
            return Err(PerplexityError::Api {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let chat_response: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| PerplexityError::Parse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| PerplexityError::Parse("response contained no choices".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Perplexity chat completion"
        );

        Ok(ChatResponse {
            content,
            usage: chat_response.usage,
        })
    }
}
