//! wayfarer_llms — provider-agnostic chat-completion client.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │               ProviderRegistry                 │
//! │  ┌──────────────────────────────────────────┐  │
//! │  │  BTreeMap<String, Arc<dyn Provider>>     │  │
//! │  └──────────────────────────────────────────┘  │
//! │                      │                         │
//! │                      ▼                         │
//! │               ┌────────────┐                   │
//! │               │    Groq    │                   │
//! │               │  Provider  │                   │
//! │               └────────────┘                   │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! One `complete` call per conversation turn; no streaming, no retries,
//! no caching. Those concerns, if ever wanted, belong here and not in the
//! conversation builder.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wayfarer_llms::{GroqProvider, ProviderRegistry};
//!
//! let provider = GroqProvider::from_env().unwrap();
//! let registry = ProviderRegistry::new().register("groq", provider);
//! ```

pub mod error;
pub mod provider;
pub mod providers;
pub mod types;


// Re-export core abstractions
pub use error::{Error, Result};
pub use provider::{Provider, ProviderRegistry};

// Re-export provider implementations
pub use providers::GroqProvider;

// Re-export commonly used types
pub use types::{CompletionOptions, CompletionRequest, CompletionResponse, Message, Role, Usage};
