//! Runtime configuration for wayfarer

use wayfarer_core::LengthPreference;

use crate::error::{Result, RuntimeError};

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Completion model to use
    pub model: String,
    /// Provider id serving the model
    pub provider: String,
    /// Maximum tokens for the reply (None = provider default)
    pub max_tokens: Option<u32>,
    /// Sampling temperature (None = provider default)
    pub temperature: Option<f32>,
    /// Length preference selected at startup (the UI may change it per turn)
    pub preference: LengthPreference,
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self {
            model: wayfarer_constant::app::DEFAULT_MODEL.to_string(),
            provider: wayfarer_constant::app::DEFAULT_PROVIDER.to_string(),
            max_tokens: None,
            temperature: None,
            preference: LengthPreference::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_preference(mut self, preference: LengthPreference) -> Self {
        self.preference = preference;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// An unparseable `WAYFARER_LENGTH` is an error, not a fallback to the
    /// default: the closed set rejects unknown keys.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Ok(model) = std::env::var("WAYFARER_MODEL") {
            config.model = model;
        }

        if let Ok(max_tokens) = std::env::var("WAYFARER_MAX_TOKENS") {
            if let Ok(val) = max_tokens.parse::<u32>() {
                config.max_tokens = Some(val);
            }
        }

        if let Ok(label) = std::env::var("WAYFARER_LENGTH") {
            config.preference = LengthPreference::from_label(&label)
                .map_err(|e| RuntimeError::Config(e.to_string()))?;
        }

        Ok(config)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}
