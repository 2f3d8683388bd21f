//! Error types for observability crate

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("failed to initialize tracing: {0}")]
    InitFailed(String),
}
