//! Groq-specific wire types

use serde::{Deserialize, Serialize};

/// Configuration for the Groq provider
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL (default: https://api.groq.com/openai/v1/)
    pub base_url: String,
}

impl GroqConfig {
    /// Create new config with API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.groq.com/openai/v1/".to_string(),
        }
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }
}

/// Groq chat completion request
#[derive(Debug, Serialize)]
pub struct GroqRequest {
    pub model: String,
    pub messages: Vec<GroqMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Groq message
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GroqMessage {
    pub role: String,
    pub content: String,
}

/// Groq chat completion response
#[derive(Debug, Deserialize)]
pub struct GroqResponse {
    pub model: String,
    pub choices: Vec<GroqChoice>,
    #[serde(default)]
    pub usage: Option<GroqUsage>,
}

/// Groq response choice
#[derive(Debug, Deserialize)]
pub struct GroqChoice {
    pub message: GroqResponseMessage,
    pub finish_reason: Option<String>,
}

/// Groq response message
#[derive(Debug, Deserialize)]
pub struct GroqResponseMessage {
    pub role: String,
    pub content: Option<String>,
}

/// Groq usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// Groq models listing (GET /models)
#[derive(Debug, Deserialize)]
pub struct GroqModelList {
    pub data: Vec<GroqModel>,
}

/// One entry of the models listing
#[derive(Debug, Deserialize)]
pub struct GroqModel {
    pub id: String,
}
