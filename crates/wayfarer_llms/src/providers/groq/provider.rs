//! Groq provider implementation

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::convert::{from_groq_response, to_groq_request};
use super::types::{GroqConfig, GroqModelList, GroqResponse};
use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::types::{CompletionRequest, CompletionResponse};

/// Groq provider
pub struct GroqProvider {
    config: GroqConfig,
    client: Client,
}

impl GroqProvider {
    /// Environment variable for API key
    pub const API_KEY_ENV: &'static str = "GROQ_API_KEY";

    /// Create a new Groq provider
    pub fn new(config: GroqConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::MissingApiKey("groq".to_string()));
        }

        let client = Client::new();
        Ok(Self { config, client })
    }

    /// Create provider from environment
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(Self::API_KEY_ENV)
            .map_err(|_| Error::MissingApiKey("groq".to_string()))?;

        Self::new(GroqConfig::new(api_key))
    }
}

#[async_trait]
impl Provider for GroqProvider {
    fn provider_id(&self) -> &str {
        "groq"
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}models", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::api("groq", status, error_text));
        }

        let listing: GroqModelList = response.json().await?;
        Ok(listing.data.into_iter().map(|m| m.id).collect())
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let url = format!("{}chat/completions", self.config.base_url);
        let groq_request = to_groq_request(&request);
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "sending completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&groq_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::api("groq", status, error_text));
        }

        let groq_resp: GroqResponse = response.json().await?;
        from_groq_response(groq_resp)
    }
}
