//! User message rendering.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::layouts::{fg, CHAT_LEFT_INDENT};
use crate::theme::WayfarerPalette;
use crate::utils::wrap_lines;

/// One message typed by the user.
#[derive(Debug, Clone)]
pub struct UserMessage {
    pub text: String,
    pub timestamp: Option<String>,
}

/// Render a user message: "You · HH:MM" header, then indented wrapped body.
pub fn user_message_lines(
    msg: &UserMessage,
    palette: &WayfarerPalette,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut header = vec![Span::styled(
        "You".to_string(),
        fg(palette.accent).add_modifier(Modifier::BOLD),
    )];
    if let Some(ts) = &msg.timestamp {
        header.push(Span::styled(format!(" · {}", ts), fg(palette.text_muted)));
    }
    lines.push(Line::from(header));

    let body_width = width.saturating_sub(CHAT_LEFT_INDENT.len());
    for wrapped in wrap_lines(&msg.text, body_width.max(1)) {
        lines.push(Line::from(vec![
            Span::raw(CHAT_LEFT_INDENT),
            Span::styled(wrapped, fg(palette.text)),
        ]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_lines_have_header_and_body() {
        let palette = WayfarerPalette::travel_dark();
        let msg = UserMessage {
            text: "Where should I go in spring?".to_string(),
            timestamp: Some("10:30".to_string()),
        };
        let lines = user_message_lines(&msg, &palette, 60);
        assert!(lines.len() >= 2);
        let header: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(header.contains("You"));
        assert!(header.contains("10:30"));
    }

    #[test]
    fn user_lines_wrap_to_width() {
        let palette = WayfarerPalette::travel_dark();
        let msg = UserMessage {
            text: "word ".repeat(30).trim().to_string(),
            timestamp: None,
        };
        let lines = user_message_lines(&msg, &palette, 20);
        assert!(lines.len() > 3);
    }
}
