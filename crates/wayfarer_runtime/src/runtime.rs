//! Per-turn orchestration: build the request, call the gateway, record the turn.
//!
//! One submission at a time; the UI holds new input while a turn is in
//! flight. A failed gateway call leaves the session history exactly as it
//! was — the turn is only appended after a successful reply.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{info, Instrument};
use wayfarer_core::{LengthPreference, Session, SessionConfig, SessionEvent, TokenUsage, Turn};
use wayfarer_llms::{GroqProvider, Provider};
use wayfarer_observability::{record_duration, record_error};

use crate::config::RuntimeConfig;
use crate::context::{build_completion_request, build_messages, persona_prompt};
use crate::error::RuntimeError;

/// The conversation orchestrator.
///
/// Owns the session history and the gateway handle; emits [SessionEvent]s
/// to the UI while handling a submission.
pub struct Runtime {
    /// The current session state
    pub session: Session,
    /// Completion gateway
    pub gateway: Arc<dyn Provider>,
    /// Event channel to the UI
    pub event_tx: mpsc::Sender<SessionEvent>,
    /// Runtime configuration
    pub config: RuntimeConfig,
}

impl Runtime {
    /// Create a new Runtime with the given configuration.
    ///
    /// The gateway is constructed from the environment here, so a missing
    /// API key fails at startup rather than on the first submission.
    pub fn new(
        config: RuntimeConfig,
        event_tx: mpsc::Sender<SessionEvent>,
    ) -> Result<Self, RuntimeError> {
        let gateway =
            GroqProvider::from_env().map_err(|e| RuntimeError::Config(e.to_string()))?;
        Ok(Self::with_gateway(config, event_tx, Arc::new(gateway)))
    }

    /// Create a Runtime around an existing gateway handle.
    pub fn with_gateway(
        config: RuntimeConfig,
        event_tx: mpsc::Sender<SessionEvent>,
        gateway: Arc<dyn Provider>,
    ) -> Self {
        let session = Session::new(SessionConfig::new(&config.model, &config.provider));
        Self {
            session,
            gateway,
            event_tx,
            config,
        }
    }

    /// Drop the current history and start a fresh session.
    pub fn reset_session(&mut self) {
        self.session = Session::new(SessionConfig::new(&self.config.model, &self.config.provider));
    }

    /// Handle one submission: build the message sequence, call the gateway,
    /// append the completed turn, and notify the UI.
    pub async fn run(
        &mut self,
        text: String,
        preference: LengthPreference,
    ) -> Result<(), RuntimeError> {
        let span = tracing::info_span!(
            "runtime.turn",
            session.id = %self.session.id,
            preference = %preference,
        );
        async {
            info!("Submitting turn to gateway");

            let _ = self.event_tx.send(SessionEvent::reply_start()).await;

            let messages = build_messages(persona_prompt(), &self.session, &text, preference);
            let request = build_completion_request(&self.config, messages);

            if tracing::enabled!(tracing::Level::DEBUG) {
                let req_body = serde_json::to_string_pretty(&request)
                    .unwrap_or_else(|_| format!("{:?}", request));
                tracing::debug!(
                    target: "wayfarer.trace",
                    message = %format!("completion request model={}\n{}", request.model, req_body)
                );
            }

            let start = Instant::now();
            let response = match self.gateway.complete(request).await {
                Ok(r) => r,
                Err(e) => {
                    let err = RuntimeError::Gateway(e.to_string());
                    record_error(&err);
                    let _ = self.event_tx.send(SessionEvent::error(err.to_string())).await;
                    let _ = self.event_tx.send(SessionEvent::turn_end()).await;
                    return Err(err);
                }
            };
            record_duration("gateway.complete_ms", start.elapsed());

            let usage = response
                .usage
                .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens));

            let mut turn = Turn::new(text, &response.text);
            if let Some(u) = usage {
                turn = turn.with_token_usage(u);
            }
            self.session.add_turn(turn);
            info!(turns = self.session.turn_count(), "Turn recorded");

            let _ = self.event_tx.send(SessionEvent::reply(response.text, usage)).await;
            let _ = self.event_tx.send(SessionEvent::turn_end()).await;

            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use wayfarer_llms::types::{CompletionRequest, CompletionResponse, Usage};
    use wayfarer_llms::{Error as LlmError, Role};

    /// Gateway double that replies with a fixed text and records nothing.
    struct EchoGateway;

    #[async_trait]
    impl Provider for EchoGateway {
        fn provider_id(&self) -> &str {
            "echo"
        }

        async fn list_models(&self) -> wayfarer_llms::Result<Vec<String>> {
            Ok(vec![])
        }

        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> wayfarer_llms::Result<CompletionResponse> {
            // Sanity-check the builder output made it through untouched.
            assert_eq!(request.messages.first().unwrap().role, Role::System);
            Ok(CompletionResponse {
                text: "Try Kyoto.".to_string(),
                model: request.model,
                usage: Some(Usage {
                    prompt_tokens: 10,
                    completion_tokens: 4,
                }),
            })
        }
    }

    /// Gateway double that always fails.
    struct BrokenGateway;

    #[async_trait]
    impl Provider for BrokenGateway {
        fn provider_id(&self) -> &str {
            "broken"
        }

        async fn list_models(&self) -> wayfarer_llms::Result<Vec<String>> {
            Err(LlmError::api("broken", 503, "unavailable"))
        }

        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> wayfarer_llms::Result<CompletionResponse> {
            Err(LlmError::api("broken", 503, "unavailable"))
        }
    }

    fn runtime_with(gateway: Arc<dyn Provider>) -> (Runtime, mpsc::Receiver<SessionEvent>) {
        let (event_tx, event_rx) = mpsc::channel(16);
        let runtime = Runtime::with_gateway(RuntimeConfig::new(), event_tx, gateway);
        (runtime, event_rx)
    }

    #[tokio::test]
    async fn test_successful_turn_is_appended() {
        let (mut runtime, mut event_rx) = runtime_with(Arc::new(EchoGateway));

        runtime
            .run("Where should I go?".to_string(), LengthPreference::Concise)
            .await
            .unwrap();

        assert_eq!(runtime.session.turn_count(), 1);
        let turn = runtime.session.last_turn().unwrap();
        assert_eq!(turn.user, "Where should I go?");
        assert_eq!(turn.assistant, "Try Kyoto.");
        assert_eq!(turn.token_usage.unwrap().total(), 14);

        assert!(matches!(
            event_rx.recv().await.unwrap(),
            SessionEvent::ReplyStart
        ));
        assert!(matches!(
            event_rx.recv().await.unwrap(),
            SessionEvent::Reply { .. }
        ));
        assert!(matches!(
            event_rx.recv().await.unwrap(),
            SessionEvent::TurnEnd
        ));
    }

    #[tokio::test]
    async fn test_failed_turn_leaves_history_unchanged() {
        let (mut runtime, mut event_rx) = runtime_with(Arc::new(BrokenGateway));

        let result = runtime
            .run("Where should I go?".to_string(), LengthPreference::Moderate)
            .await;

        assert!(matches!(result, Err(RuntimeError::Gateway(_))));
        assert_eq!(runtime.session.turn_count(), 0);

        assert!(matches!(
            event_rx.recv().await.unwrap(),
            SessionEvent::ReplyStart
        ));
        assert!(matches!(
            event_rx.recv().await.unwrap(),
            SessionEvent::Error { .. }
        ));
        assert!(matches!(
            event_rx.recv().await.unwrap(),
            SessionEvent::TurnEnd
        ));
    }

    #[tokio::test]
    async fn test_history_accumulates_across_turns() {
        let (mut runtime, _event_rx) = runtime_with(Arc::new(EchoGateway));

        runtime
            .run("first".to_string(), LengthPreference::Moderate)
            .await
            .unwrap();
        runtime
            .run("second".to_string(), LengthPreference::Moderate)
            .await
            .unwrap();

        assert_eq!(runtime.session.turn_count(), 2);
        assert_eq!(runtime.session.turns[0].user, "first");
        assert_eq!(runtime.session.turns[1].user, "second");
    }

    #[tokio::test]
    async fn test_reset_session_drops_history() {
        let (mut runtime, _event_rx) = runtime_with(Arc::new(EchoGateway));

        runtime
            .run("first".to_string(), LengthPreference::Moderate)
            .await
            .unwrap();
        let old_id = runtime.session.id;

        runtime.reset_session();

        assert_eq!(runtime.session.turn_count(), 0);
        assert_ne!(runtime.session.id, old_id);
    }
}
