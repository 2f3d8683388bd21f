//! Conversion between unified types and Groq wire types

use super::types::{GroqMessage, GroqRequest, GroqResponse};
use crate::error::{Error, Result};
use crate::types::{CompletionRequest, CompletionResponse, Message, Role, Usage};

/// Convert unified request to Groq request
pub fn to_groq_request(req: &CompletionRequest) -> GroqRequest {
    let messages = req.messages.iter().map(to_groq_message).collect();

    GroqRequest {
        model: req.model.clone(),
        messages,
        temperature: req.options.temperature,
        max_tokens: req.options.max_tokens,
    }
}

/// Convert unified message to Groq message
fn to_groq_message(msg: &Message) -> GroqMessage {
    let role = match msg.role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    };

    GroqMessage {
        role: role.to_string(),
        content: msg.content.clone(),
    }
}

/// Convert Groq response to unified response.
///
/// The reply is the content of the first choice; a response without choices
/// or without content is malformed.
pub fn from_groq_response(resp: GroqResponse) -> Result<CompletionResponse> {
    let choice = resp
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::malformed("response contains no choices"))?;

    let text = choice
        .message
        .content
        .ok_or_else(|| Error::malformed("first choice has no content"))?;

    let usage = resp.usage.map(|u| Usage {
        prompt_tokens: u.prompt_tokens,
        completion_tokens: u.completion_tokens,
    });

    Ok(CompletionResponse {
        text,
        model: resp.model,
        usage,
    })
}
