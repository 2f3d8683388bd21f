//! History-to-messages conversion and request building.

use wayfarer_core::{LengthPreference, Session};
use wayfarer_llms::types::{CompletionOptions, CompletionRequest, Message};

use crate::config::RuntimeConfig;

/// Build the outbound message sequence for one submission.
///
/// The shape is fixed: one leading system message with the persona, the full
/// history replayed in order (each turn as one user then one assistant
/// message), the new user message, then one trailing system message with the
/// length instruction. Total length is always `2 * turns + 3`.
///
/// Pure: the session is only read, and identical inputs produce identical
/// output. The new message is taken verbatim; content validation, if any,
/// is the caller's concern.
pub fn build_messages(
    persona: &str,
    session: &Session,
    new_message: &str,
    preference: LengthPreference,
) -> Vec<Message> {
    let mut messages = Vec::with_capacity(2 * session.turn_count() + 3);

    messages.push(Message::system(persona));

    for turn in &session.turns {
        messages.push(Message::user(turn.user.clone()));
        messages.push(Message::assistant(turn.assistant.clone()));
    }

    messages.push(Message::user(new_message));
    messages.push(Message::system(preference.instruction()));

    messages
}

/// Build a CompletionRequest ready to send to the gateway.
pub fn build_completion_request(config: &RuntimeConfig, messages: Vec<Message>) -> CompletionRequest {
    let mut options = CompletionOptions::new();
    if let Some(max_tokens) = config.max_tokens {
        options = options.max_tokens(max_tokens);
    }
    if let Some(temperature) = config.temperature {
        options = options.temperature(temperature);
    }

    CompletionRequest::new(&config.model, messages).with_options(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::{SessionConfig, Turn};
    use wayfarer_llms::types::Role;

    const PERSONA: &str = "You are a Travel Advisor.";

    fn session_with(turns: &[(&str, &str)]) -> Session {
        let mut session = Session::new(SessionConfig::new("llama-3.3-70b-versatile", "groq"));
        for (user, assistant) in turns {
            session.add_turn(Turn::new(*user, *assistant));
        }
        session
    }

    #[test]
    fn test_empty_history_builds_three_messages() {
        let session = session_with(&[]);

        let messages = build_messages(PERSONA, &session, "Where to?", LengthPreference::Moderate);

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], Message::system(PERSONA));
        assert_eq!(messages[1], Message::user("Where to?"));
        assert_eq!(
            messages[2],
            Message::system("Respond with a balanced explanation.")
        );
    }

    #[test]
    fn test_length_is_two_per_turn_plus_three() {
        for n in 0..5 {
            let turns: Vec<(&str, &str)> = (0..n).map(|_| ("q", "a")).collect();
            let session = session_with(&turns);
            for preference in LengthPreference::ALL {
                let messages = build_messages(PERSONA, &session, "next", preference);
                assert_eq!(messages.len(), 2 * n + 3);
            }
        }
    }

    #[test]
    fn test_first_message_is_always_persona() {
        let session = session_with(&[("q1", "a1"), ("q2", "a2")]);
        for preference in LengthPreference::ALL {
            let messages = build_messages(PERSONA, &session, "next", preference);
            assert_eq!(messages[0].role, Role::System);
            assert_eq!(messages[0].content, PERSONA);
        }
    }

    #[test]
    fn test_last_message_carries_the_instruction() {
        let session = session_with(&[("q1", "a1")]);
        for preference in LengthPreference::ALL {
            let messages = build_messages(PERSONA, &session, "next", preference);
            let last = messages.last().unwrap();
            assert_eq!(last.role, Role::System);
            assert_eq!(last.content, preference.instruction());
        }
    }

    #[test]
    fn test_history_replayed_in_order() {
        let session = session_with(&[("Where should I go in spring?", "Try Kyoto.")]);

        let messages = build_messages(
            PERSONA,
            &session,
            "What about food?",
            LengthPreference::Concise,
        );

        assert_eq!(
            messages,
            vec![
                Message::system(PERSONA),
                Message::user("Where should I go in spring?"),
                Message::assistant("Try Kyoto."),
                Message::user("What about food?"),
                Message::system("Respond briefly."),
            ]
        );
    }

    #[test]
    fn test_empty_new_message_is_appended_verbatim() {
        let session = session_with(&[]);

        let messages = build_messages(PERSONA, &session, "", LengthPreference::Concise);

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1], Message::user(""));
    }

    #[test]
    fn test_builder_is_deterministic_and_does_not_mutate() {
        let session = session_with(&[("q1", "a1"), ("q2", "a2")]);
        let turns_before: Vec<(String, String)> = session
            .turns
            .iter()
            .map(|t| (t.user.clone(), t.assistant.clone()))
            .collect();

        let first = build_messages(PERSONA, &session, "next", LengthPreference::Explained);
        let second = build_messages(PERSONA, &session, "next", LengthPreference::Explained);

        assert_eq!(first, second);
        assert_eq!(session.turn_count(), 2);
        let turns_after: Vec<(String, String)> = session
            .turns
            .iter()
            .map(|t| (t.user.clone(), t.assistant.clone()))
            .collect();
        assert_eq!(turns_before, turns_after);
    }

    #[test]
    fn test_build_completion_request_attaches_model_and_options() {
        let config = RuntimeConfig::new().with_max_tokens(1024).with_temperature(0.7);
        let session = session_with(&[]);
        let messages = build_messages(PERSONA, &session, "hi", LengthPreference::Moderate);

        let request = build_completion_request(&config, messages);

        assert_eq!(request.model, "llama-3.3-70b-versatile");
        assert_eq!(request.messages.len(), 3);
        assert_eq!(request.options.max_tokens, Some(1024));
        assert_eq!(request.options.temperature, Some(0.7));
    }

    #[test]
    fn test_build_completion_request_defaults_leave_options_unset() {
        let config = RuntimeConfig::new();
        let request = build_completion_request(&config, vec![Message::user("hi")]);

        assert_eq!(request.options.max_tokens, None);
        assert_eq!(request.options.temperature, None);
    }
}
