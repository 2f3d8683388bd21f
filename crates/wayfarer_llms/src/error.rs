//! Gateway error surface. Everything the completion boundary can fail with
//! maps to one of these variants; callers see a single error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing API key for provider '{0}'")]
    MissingApiKey(String),

    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    #[error("{provider} API error {status}: {message}")]
    Api {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub fn api(provider: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Error::Api {
            provider: provider.into(),
            status,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedResponse(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_message() {
        let err = Error::MissingApiKey("groq".to_string());
        assert_eq!(err.to_string(), "missing API key for provider 'groq'");
    }

    #[test]
    fn test_provider_not_found_message() {
        let err = Error::ProviderNotFound("openai".to_string());
        assert_eq!(err.to_string(), "provider not found: openai");
    }

    #[test]
    fn test_api_error_message() {
        let err = Error::api("groq", 401, "invalid key");
        assert_eq!(err.to_string(), "groq API error 401: invalid key");
    }

    #[test]
    fn test_malformed_response_message() {
        let err = Error::malformed("no choices in response");
        assert_eq!(err.to_string(), "malformed response: no choices in response");
    }
}
