//! Inline error rendering (gateway failures shown in the transcript).

use ratatui::text::{Line, Span};

use crate::layouts::{fg, CHAT_LEFT_INDENT};
use crate::theme::WayfarerPalette;
use crate::utils::wrap_lines;

/// One failure surfaced to the user. The turn it belongs to was not recorded.
#[derive(Debug, Clone)]
pub struct ErrorMessage {
    pub text: String,
    pub timestamp: Option<String>,
}

/// Render an error message: "✗" marker, then indented wrapped body in danger color.
pub fn error_message_lines(
    msg: &ErrorMessage,
    palette: &WayfarerPalette,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "✗ request failed".to_string(),
        fg(palette.danger),
    ))];

    let body_width = width.saturating_sub(CHAT_LEFT_INDENT.len());
    for wrapped in wrap_lines(&msg.text, body_width.max(1)) {
        lines.push(Line::from(vec![
            Span::raw(CHAT_LEFT_INDENT),
            Span::styled(wrapped, fg(palette.danger)),
        ]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_lines_carry_the_message() {
        let palette = WayfarerPalette::travel_dark();
        let msg = ErrorMessage {
            text: "groq API error 503: unavailable".to_string(),
            timestamp: None,
        };
        let lines = error_message_lines(&msg, &palette, 60);
        assert!(lines.len() >= 2);
        let body: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(body.contains("503"));
    }
}
