//! Shared utilities for the wayfarer TUI.
//!
//! - **[constants]** — Spacing and padding constants.
//! - **[layout]** — Rect padding and scroll clamping.
//! - **[format]** — String wrapping and truncation for messages and status.

mod constants;
mod format;
mod layout;

pub use constants::*;
pub use format::{display_width, truncate_ellipsis, wrap_lines};
pub use layout::{horizontal_padding, scroll_with_buffer};
