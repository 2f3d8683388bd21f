//! `wayfarer ask` — one-shot question, printed reply.

use anyhow::Result;
use tokio::sync::mpsc;
use wayfarer_core::LengthPreference;
use wayfarer_runtime::{Runtime, RuntimeConfig};

use crate::output;

pub async fn handle(prompt: String, model: Option<String>, length: Option<String>) -> Result<()> {
    let mut config = RuntimeConfig::from_env()?;
    if let Some(m) = model {
        config = config.with_model(m);
    }
    if let Some(l) = length {
        config = config.with_preference(LengthPreference::from_label(&l)?);
    }
    let preference = config.preference;

    // Events are consumed by the TUI normally; here nobody listens, the
    // channel just has to be deep enough for one turn.
    let (event_tx, _event_rx) = mpsc::channel(16);
    let mut runtime = Runtime::new(config, event_tx)?;

    let spinner = output::spinner("Asking the travel advisor…");
    match runtime.run(prompt, preference).await {
        Ok(()) => {
            spinner.finish_and_clear();
            let reply = runtime
                .session
                .last_turn()
                .map(|t| t.assistant.clone())
                .unwrap_or_default();
            output::plain(&reply);
            if let Some(usage) = runtime.session.last_turn().and_then(|t| t.token_usage) {
                output::dim(&format!(
                    "{} tokens ({}↑ {}↓)",
                    usage.total(),
                    usage.prompt_tokens,
                    usage.completion_tokens,
                ));
            }
            Ok(())
        }
        Err(e) => {
            output::spinner_error(&spinner, "Request failed");
            Err(e.into())
        }
    }
}
