//! Advisor (assistant) message rendering.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::layouts::{fg, CHAT_LEFT_INDENT};
use crate::theme::WayfarerPalette;
use crate::utils::wrap_lines;

/// One reply from the travel advisor.
#[derive(Debug, Clone)]
pub struct AdvisorMessage {
    pub text: String,
    pub timestamp: Option<String>,
}

/// Render an advisor message: "Advisor · HH:MM" header, then indented wrapped body.
pub fn advisor_message_lines(
    msg: &AdvisorMessage,
    palette: &WayfarerPalette,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut header = vec![Span::styled(
        "Advisor".to_string(),
        fg(palette.text_accent).add_modifier(Modifier::BOLD),
    )];
    if let Some(ts) = &msg.timestamp {
        header.push(Span::styled(format!(" · {}", ts), fg(palette.text_muted)));
    }
    lines.push(Line::from(header));

    let body_width = width.saturating_sub(CHAT_LEFT_INDENT.len());
    // Replies keep their own paragraph breaks; wrap each paragraph separately.
    for paragraph in msg.text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(Line::raw(""));
            continue;
        }
        for wrapped in wrap_lines(paragraph, body_width.max(1)) {
            lines.push(Line::from(vec![
                Span::raw(CHAT_LEFT_INDENT),
                Span::styled(wrapped, fg(palette.text)),
            ]));
        }
    }

    lines
}
