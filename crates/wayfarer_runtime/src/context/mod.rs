//! Conversation building for the Runtime.
//!
//! Split into focused submodules:
//! - **prompt** — the static advisor persona
//! - **messages** — history-to-messages conversion and request building

mod messages;
mod prompt;

pub use messages::{build_completion_request, build_messages};
pub use prompt::persona_prompt;
