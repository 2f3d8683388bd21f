//! Map [wayfarer_core::SessionEvent] to [TuiState] updates.

use wayfarer_core::SessionEvent;

use crate::state::TuiState;
use crate::utils::truncate_ellipsis;

/// Apply a session event to TUI state.
/// Runtime logs are shown in the debug traces screen (Ctrl+D), not session events.
pub fn apply_session_event(state: &mut TuiState, event: SessionEvent) {
    state.needs_redraw = true;
    match event {
        SessionEvent::ReplyStart => {
            state.is_waiting = true;
            state.set_status("Thinking…");
        }
        SessionEvent::Reply { text, usage } => {
            state.is_waiting = false;
            let ts = chrono::Local::now().format("%H:%M").to_string();
            state.push_advisor(text, Some(ts));
            match usage {
                Some(u) => state.set_status(format!(
                    "Turn complete · {} tokens ({}↑ {}↓)",
                    format_token_count(u.total()),
                    format_token_count(u.prompt_tokens),
                    format_token_count(u.completion_tokens),
                )),
                None => state.set_status("Turn complete"),
            }
        }
        SessionEvent::Status { message } => {
            state.set_status(message);
        }
        SessionEvent::Error { error } => {
            state.is_waiting = false;
            // Header status is one line; keep the full text in the transcript.
            state.set_status(truncate_ellipsis(&error, 80));
            state.push_error(error, None);
        }
        SessionEvent::TurnEnd => {
            state.is_waiting = false;
        }
    }
}

/// Format token count for display: "1,234" or "12.3k" for large numbers.
fn format_token_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 10_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else if n >= 1_000 {
        let s = n.to_string();
        let (head, tail) = s.split_at(s.len() - 3);
        format!("{},{}", head, tail)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ChatItem;
    use wayfarer_core::TokenUsage;

    #[test]
    fn reply_start_enters_waiting() {
        let mut state = TuiState::new();
        apply_session_event(&mut state, SessionEvent::reply_start());
        assert!(state.is_waiting);
        assert_eq!(state.status, "Thinking…");
    }

    #[test]
    fn reply_pushes_advisor_message() {
        let mut state = TuiState::new();
        apply_session_event(&mut state, SessionEvent::reply_start());
        apply_session_event(
            &mut state,
            SessionEvent::reply("Try Kyoto.", Some(TokenUsage::new(100, 20))),
        );

        assert!(!state.is_waiting);
        assert_eq!(state.messages.len(), 1);
        assert!(matches!(&state.messages[0], ChatItem::Advisor(m) if m.text == "Try Kyoto."));
        assert!(state.status.contains("120 tokens"));
    }

    #[test]
    fn error_pushes_inline_error_and_clears_waiting() {
        let mut state = TuiState::new();
        apply_session_event(&mut state, SessionEvent::reply_start());
        apply_session_event(&mut state, SessionEvent::error("gateway error: 503"));
        apply_session_event(&mut state, SessionEvent::turn_end());

        assert!(!state.is_waiting);
        assert_eq!(state.messages.len(), 1);
        assert!(matches!(&state.messages[0], ChatItem::Error(_)));
        assert!(state.status.contains("503"));
    }

    #[test]
    fn turn_end_alone_clears_waiting() {
        let mut state = TuiState::new();
        state.is_waiting = true;
        apply_session_event(&mut state, SessionEvent::turn_end());
        assert!(!state.is_waiting);
    }

    #[test]
    fn format_token_count_ranges() {
        assert_eq!(format_token_count(999), "999");
        assert_eq!(format_token_count(1_234), "1,234");
        assert_eq!(format_token_count(12_345), "12.3k");
        assert_eq!(format_token_count(2_000_000), "2.0M");
    }
}
