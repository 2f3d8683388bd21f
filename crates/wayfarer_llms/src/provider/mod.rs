//! The gateway boundary: the [Provider] trait and a registry of
//! configured backends.

mod trait_def;

pub use trait_def::Provider;

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Configured completion backends, keyed by provider id.
///
/// Lookup of an unknown id is an explicit [Error::ProviderNotFound];
/// ids come back in sorted order so listings render stably.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider under `id`, replacing any previous entry. Chainable.
    pub fn register<P: Provider + 'static>(mut self, id: impl Into<String>, provider: P) -> Self {
        self.providers.insert(id.into(), Arc::new(provider));
        self
    }

    /// Resolve `id` to a gateway handle.
    pub fn get_provider(&self, id: &str) -> Result<Arc<dyn Provider>> {
        match self.providers.get(id) {
            Some(provider) => Ok(Arc::clone(provider)),
            None => Err(Error::ProviderNotFound(id.to_string())),
        }
    }

    /// Registered ids, sorted.
    pub fn list_providers(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
