//! Groq provider module
//!
//! Implements the Provider trait against Groq's OpenAI-compatible
//! chat-completions API. API docs: https://console.groq.com/docs/api-reference

mod convert;
mod provider;
mod types;

pub use provider::GroqProvider;
pub use types::{GroqConfig, GroqRequest, GroqResponse};
