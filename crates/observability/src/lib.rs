//! Wayfarer observability - tracing setup shared by the CLI and runtime
//!
//! Composes a `tracing_subscriber` registry from an env-filter, an optional
//! console fmt layer, and an optional log sink that forwards each formatted
//! line to the TUI's runtime-logs screen.
//!
//! # Quick Start
//!
//! ```no_run
//! use wayfarer_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("wayfarer").with_log_level("info");
//! init(config).unwrap();
//!
//! tracing::info!("Service started");
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Log level filter when none is configured programmatically

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;
pub mod tui_log_layer;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
pub use tracing::{record_duration, record_error};
