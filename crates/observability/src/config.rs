//! Configuration for observability

use std::sync::Arc;

/// Sink for runtime log lines (e.g. TUI debug traces). Called from the
/// tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// What the tracing subscriber is composed of.
#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Service name recorded on startup.
    pub service_name: String,

    /// Write formatted events to stderr/stdout via the fmt layer.
    pub enable_console: bool,

    /// Filter directive (e.g. "info", "debug", "wayfarer=trace").
    /// When unset, `RUST_LOG` applies, then "info".
    pub log_level: Option<String>,

    /// Optional per-line sink (e.g. the TUI debug-traces screen).
    pub log_sink: Option<LogSink>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "wayfarer".to_string(),
            enable_console: true,
            log_level: None,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("enable_console", &self.enable_console)
            .field("log_level", &self.log_level)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Defaults; the env filter itself picks up `RUST_LOG`.
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.service_name, "wayfarer");
        assert!(config.enable_console);
        assert!(config.log_level.is_none());
        assert!(config.log_sink.is_none());
    }

    #[test]
    fn builder_sets_every_field() {
        let sink: LogSink = Arc::new(|_line| {});
        let config = ObservabilityConfig::new("wayfarer-tui")
            .with_log_level("debug")
            .with_console(false)
            .with_log_sink(sink);

        assert_eq!(config.service_name, "wayfarer-tui");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(!config.enable_console);
        assert!(config.log_sink.is_some());
    }

    #[test]
    fn debug_does_not_print_sink() {
        let sink: LogSink = Arc::new(|_line| {});
        let config = ObservabilityConfig::default().with_log_sink(sink);
        assert!(format!("{:?}", config).contains("Some(LogSink)"));
    }
}
