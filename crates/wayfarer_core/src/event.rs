use serde::{Deserialize, Serialize};

use crate::preference::LengthPreference;
use crate::turn::TokenUsage;

/// One user submission from the UI: the message text plus the length
/// preference selected at submit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSubmission {
    pub text: String,
    pub preference: LengthPreference,
}

impl ChatSubmission {
    pub fn new(text: impl Into<String>, preference: LengthPreference) -> Self {
        Self {
            text: text.into(),
            preference,
        }
    }
}

/// Events the runtime sends to the UI while handling one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The gateway call is in flight; the UI should show a waiting state.
    ReplyStart,

    /// The advisor's reply for this turn, with usage when the gateway reported it.
    Reply {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        usage: Option<TokenUsage>,
    },

    Status { message: String },

    Error { error: String },

    TurnEnd,
}

impl SessionEvent {
    pub fn reply_start() -> Self {
        SessionEvent::ReplyStart
    }

    pub fn reply(text: impl Into<String>, usage: Option<TokenUsage>) -> Self {
        SessionEvent::Reply {
            text: text.into(),
            usage,
        }
    }

    pub fn status(message: impl Into<String>) -> Self {
        SessionEvent::Status {
            message: message.into(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        SessionEvent::Error {
            error: error.into(),
        }
    }

    pub fn turn_end() -> Self {
        SessionEvent::TurnEnd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_start() {
        let event = SessionEvent::reply_start();
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"reply_start"}"#);
    }

    #[test]
    fn test_reply_without_usage() {
        let event = SessionEvent::reply("Try Kyoto.", None);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"reply"#));
        assert!(json.contains("Try Kyoto."));
        assert!(!json.contains("usage"));
    }

    #[test]
    fn test_reply_with_usage() {
        let event = SessionEvent::reply("Try Kyoto.", Some(TokenUsage::new(100, 20)));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""prompt_tokens":100"#));
        assert!(json.contains(r#""completion_tokens":20"#));
    }

    #[test]
    fn test_status() {
        let event = SessionEvent::status("New session");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"status"#));
        assert!(json.contains("New session"));
    }

    #[test]
    fn test_error() {
        let event = SessionEvent::error("gateway unreachable");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"error"#));
        assert!(json.contains("gateway unreachable"));
    }

    #[test]
    fn test_turn_end() {
        let event = SessionEvent::turn_end();
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"turn_end"}"#);
    }

    #[test]
    fn test_event_roundtrip() {
        let event = SessionEvent::reply("hello", Some(TokenUsage::new(1, 2)));
        let json = serde_json::to_string(&event).unwrap();
        let decoded: SessionEvent = serde_json::from_str(&json).unwrap();

        if let SessionEvent::Reply { text, usage } = decoded {
            assert_eq!(text, "hello");
            assert_eq!(usage.unwrap().total(), 3);
        } else {
            panic!("Expected Reply variant");
        }
    }

    #[test]
    fn test_chat_submission() {
        let submission = ChatSubmission::new("What about food?", LengthPreference::Concise);
        let json = serde_json::to_string(&submission).unwrap();
        let decoded: ChatSubmission = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.text, "What about food?");
        assert_eq!(decoded.preference, LengthPreference::Concise);
    }
}
