//! Perplexity API request and response types.

use serde::{Deserialize, Serialize};

/// Default chat model.
pub const DEFAULT_MODEL: &str = "llama-3.1-sonar-small-128k-online";

/// Chat completion request.
///
/// Perplexity's chat completions endpoint is OpenAI-shaped but carries
/// extra search-related knobs (`search_recency_filter`, `return_images`,
/// etc.). Unset fields are omitted from the request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model to use (e.g., "llama-3.1-sonar-small-128k-online")
    pub model: String,

    /// Conversation messages
    pub messages: Vec<Message>,

    /// Sampling temperature (0.0 to 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus sampling cutoff
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Restrict search to these domains (empty = no restriction)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_domain_filter: Option<Vec<String>>,

    /// Include images in results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_images: Option<bool>,

    /// Include related questions in results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_related_questions: Option<bool>,

    /// Only consider sources within this window ("month", "week", "day")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_recency_filter: Option<String>,

    /// Top-k sampling (0 disables)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Stream the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,

    /// Presence penalty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,

    /// Frequency penalty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,
}

impl Default for ChatRequest {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            messages: Vec::new(),
            temperature: None,
            top_p: None,
            search_domain_filter: None,
            return_images: None,
            return_related_questions: None,
            search_recency_filter: None,
            top_k: None,
            stream: None,
            presence_penalty: None,
            frequency_penalty: None,
        }
    }
}

impl ChatRequest {
    /// Create a new chat request with the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Add a message to the conversation.
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set nucleus sampling cutoff.
    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Restrict search to specific domains.
    pub fn search_domain_filter(mut self, domains: Vec<String>) -> Self {
        self.search_domain_filter = Some(domains);
        self
    }

    /// Include or exclude images.
    pub fn return_images(mut self, on: bool) -> Self {
        self.return_images = Some(on);
        self
    }

    /// Include or exclude related questions.
    pub fn return_related_questions(mut self, on: bool) -> Self {
        self.return_related_questions = Some(on);
        self
    }

    /// Set the search recency window.
    pub fn search_recency_filter(mut self, window: impl Into<String>) -> Self {
        self.search_recency_filter = Some(window.into());
        self
    }

    /// Set top-k sampling.
    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Enable or disable streaming.
    pub fn stream(mut self, on: bool) -> Self {
        self.stream = Some(on);
        self
    }

    /// Set presence penalty.
    pub fn presence_penalty(mut self, penalty: f32) -> Self {
        self.presence_penalty = Some(penalty);
        self
    }

    /// Set frequency penalty.
    pub fn frequency_penalty(mut self, penalty: f32) -> Self {
        self.frequency_penalty = Some(penalty);
        self
    }
}

/// Chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role: "system", "user", "assistant"
    pub role: String,

    /// Message content
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion response.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// Response content from the first choice
    pub content: String,

    /// Token usage statistics
    pub usage: Option<Usage>,
}

/// Raw chat response from API (for internal parsing).
///
/// Only the fields this client consumes are modeled; everything else in
/// the payload (citations, ids, deltas) is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponseRaw {
    pub choices: Vec<ChatChoice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatMessageResponse {
    pub content: String,
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,

    /// Tokens in the completion
    pub completion_tokens: u32,

    /// Total tokens used
    pub total_tokens: u32,
}
