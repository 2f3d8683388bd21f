use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::turn::Turn;

/// Unique id for one chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Model and provider the session talks to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub model: String,
    pub provider: String,
}

impl SessionConfig {
    pub fn new(model: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            provider: provider.into(),
        }
    }
}

/// The conversation history for one chat session.
///
/// Turns are append-only and ordered; insertion order is the replay order
/// the builder uses. The whole session is dropped when the user ends it or
/// starts a new one — nothing is written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub config: SessionConfig,
    pub turns: Vec<Turn>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            id: SessionId::new(),
            config,
            turns: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn add_turn(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Total token usage across all turns that reported usage.
    pub fn total_tokens(&self) -> u64 {
        self.turns
            .iter()
            .filter_map(|t| t.token_usage)
            .map(|u| u.total())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turn::TokenUsage;

    fn session() -> Session {
        Session::new(SessionConfig::new("llama-3.3-70b-versatile", "groq"))
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn test_session_id_displays_as_uuid() {
        let id = SessionId::new();
        assert_eq!(id.to_string().len(), 36);
    }

    #[test]
    fn test_session_config_new() {
        let config = SessionConfig::new("llama-3.3-70b-versatile", "groq");
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.provider, "groq");
    }

    #[test]
    fn test_session_starts_empty() {
        let session = session();
        assert!(session.turns.is_empty());
        assert_eq!(session.turn_count(), 0);
        assert!(session.last_turn().is_none());
    }

    #[test]
    fn test_session_add_turn_preserves_order() {
        let mut session = session();
        session.add_turn(Turn::new("first", "one"));
        session.add_turn(Turn::new("second", "two"));

        assert_eq!(session.turn_count(), 2);
        assert_eq!(session.turns[0].user, "first");
        assert_eq!(session.turns[1].user, "second");
        assert_eq!(session.last_turn().unwrap().assistant, "two");
    }

    #[test]
    fn test_session_total_tokens() {
        let mut session = session();
        session.add_turn(Turn::new("a", "b").with_token_usage(TokenUsage::new(10, 5)));
        session.add_turn(Turn::new("c", "d")); // no usage reported
        session.add_turn(Turn::new("e", "f").with_token_usage(TokenUsage::new(20, 15)));

        assert_eq!(session.total_tokens(), 50);
    }

    #[test]
    fn test_session_serialization() {
        let mut session = session();
        session.add_turn(Turn::new("hi", "hello"));

        let json = serde_json::to_string(&session).unwrap();
        let decoded: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.id, session.id);
        assert_eq!(decoded.turn_count(), 1);
        assert_eq!(decoded.turns[0].user, "hi");
    }
}
