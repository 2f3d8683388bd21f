use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CompletionRequest, CompletionResponse};

/// A chat-completion backend. Network I/O, auth, and model selection live
/// behind this boundary; callers hand over a finished request and get back
/// one reply.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable identifier used for registry lookup and error messages.
    fn provider_id(&self) -> &str;

    /// Models this provider can serve.
    async fn list_models(&self) -> Result<Vec<String>>;

    /// Send one completion request and wait for the full reply.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}
