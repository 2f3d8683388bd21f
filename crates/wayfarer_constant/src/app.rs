//! Application metadata constants

pub const NAME: &str = "wayfarer";
pub const DISPLAY_NAME: &str = "Wayfarer — Travel Advisor";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Terminal travel-advisor chat";

/// Default completion model when none is configured.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
/// Provider id the default model is served by.
pub const DEFAULT_PROVIDER: &str = "groq";

/// Directory name for wayfarer data within the home directory
pub const DATA_DIR: &str = ".wayfarer";
/// Env file within DATA_DIR, loaded before CLI parsing
pub const ENV_FILE: &str = "env";

/// Placeholder shown in the empty input box.
pub const INPUT_PLACEHOLDER: &str = "Ask about destinations, tips, or itineraries…";
