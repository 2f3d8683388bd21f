//! `wayfarer tui` — run the interactive chat TUI with runtime integration.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use wayfarer_core::{ChatSubmission, LengthPreference};
use wayfarer_observability::{init, ObservabilityConfig};
use wayfarer_runtime::{Runtime, RuntimeConfig};
use wayfarer_tui::run_tui_with_runtime;

use crate::output;

/// Runtime worker: handle submissions one at a time; Ctrl+N resets the session.
async fn run_runtime_loop(
    mut runtime: Runtime,
    mut submission_rx: mpsc::Receiver<ChatSubmission>,
    mut new_session_rx: mpsc::Receiver<()>,
) {
    loop {
        tokio::select! {
            msg = submission_rx.recv() => {
                let Some(submission) = msg else { break };
                // Failures are already surfaced to the TUI as session events;
                // log them for the debug traces screen too.
                if let Err(e) = runtime.run(submission.text, submission.preference).await {
                    tracing::warn!(error = %e, "turn failed");
                }
            }
            _ = new_session_rx.recv() => {
                runtime.reset_session();
            }
        }
    }
}

pub async fn handle(model: Option<String>, length: Option<String>) -> Result<()> {
    // Channel for runtime logs → TUI debug traces screen (Ctrl+D)
    let (log_tx, log_rx) = mpsc::channel::<String>(512);
    let log_sink: Arc<dyn Fn(String) + Send + Sync> = Arc::new(move |line| {
        let _ = log_tx.try_send(line);
    });

    // Init tracing without console; send logs to the TUI sink. Include
    // wayfarer.trace=debug so request/response traces show under Ctrl+D.
    let mut obs_config = ObservabilityConfig::from_env()
        .with_console(false)
        .with_log_sink(log_sink);
    if obs_config.log_level.is_none() {
        obs_config = obs_config.with_log_level("info,wayfarer.trace=debug");
    }
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Observability init failed (continuing): {}", e));
    }

    let mut config = RuntimeConfig::from_env()?;
    if let Some(m) = model {
        config = config.with_model(m);
    }
    if let Some(l) = length {
        config = config.with_preference(LengthPreference::from_label(&l)?);
    }

    let (event_tx, event_rx) = mpsc::channel(256);
    let (submission_tx, submission_rx) = mpsc::channel::<ChatSubmission>(64);
    let (new_session_tx, new_session_rx) = mpsc::channel::<()>(4);

    // Builds the gateway from the environment: a missing API key fails here,
    // before the terminal is taken over.
    let runtime = Runtime::new(config, event_tx)?;

    tokio::spawn(run_runtime_loop(runtime, submission_rx, new_session_rx));

    run_tui_with_runtime(event_rx, submission_tx, Some(log_rx), Some(new_session_tx))?;
    Ok(())
}
