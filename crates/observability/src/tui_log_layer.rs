//! Tracing layer that forwards formatted log lines to a sink (e.g. TUI debug traces).

use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

/// Forwarded lines are capped so a runaway debug dump cannot flood the TUI buffer.
const MAX_LINE_LEN: usize = 32_000;

/// Collects an event's message and fields for one-line display.
#[derive(Default)]
struct EventParts {
    message: Option<String>,
    fields: Vec<String>,
}

impl Visit for EventParts {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

impl EventParts {
    /// "message key=value key=value", either part optional.
    fn into_line(self) -> String {
        let mut parts = Vec::with_capacity(1 + self.fields.len());
        if let Some(message) = self.message {
            parts.push(message);
        }
        parts.extend(self.fields);
        parts.join(" ")
    }
}

pub(crate) fn tui_log_layer(sink: Option<LogSink>) -> TuiLogLayer {
    TuiLogLayer { sink }
}

/// Sends each formatted event to the sink when one is present. The sink must
/// not block.
#[derive(Clone)]
pub(crate) struct TuiLogLayer {
    sink: Option<LogSink>,
}

impl<S> Layer<S> for TuiLogLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let Some(ref sink) = self.sink else {
            return;
        };

        let meta = event.metadata();
        let mut parts = EventParts::default();
        event.record(&mut parts);

        let body = parts.into_line();
        let mut line = if body.is_empty() {
            format!("[{}] {}", meta.level(), meta.target())
        } else {
            format!("[{}] {}: {}", meta.level(), meta.target(), body)
        };
        if line.len() > MAX_LINE_LEN {
            let total = line.len();
            let mut cut = MAX_LINE_LEN;
            while !line.is_char_boundary(cut) {
                cut -= 1;
            }
            line.truncate(cut);
            line.push_str(&format!("… ({} chars)", total));
        }
        sink(line);
    }
}
