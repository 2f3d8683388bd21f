//! Chat message types and their line rendering.
//!
//! - **[user]** — the traveler's own messages (accent header, right of mind).
//! - **[advisor]** — replies from the travel advisor.
//! - **[error]** — inline failures (gateway errors) shown in the transcript.

pub mod advisor;
pub mod error;
pub mod user;
