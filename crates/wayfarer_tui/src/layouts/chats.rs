//! Chat transcript region: padded content rect and scroll clamping.

use ratatui::layout::Rect;

use crate::utils::{horizontal_padding, scroll_with_buffer, LEFT_PADDING, MESSAGE_SPACING_LINES};

/// Indent for message body lines under their speaker header.
pub const CHAT_LEFT_INDENT: &str = LEFT_PADDING;

/// Blank lines between consecutive messages.
pub const CHAT_MESSAGE_SPACING: usize = MESSAGE_SPACING_LINES;

/// Content rect for the transcript: the body area minus horizontal padding.
pub fn chat_content_rect(body: Rect) -> Rect {
    horizontal_padding(body)
}

/// Clamp the user's scroll offset against the rendered content height so the
/// transcript never scrolls past its last line.
pub fn chat_scroll_offset(offset: usize, content_height: usize, viewport_height: usize) -> usize {
    scroll_with_buffer(offset, content_height, viewport_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_rect_is_inset() {
        let inner = chat_content_rect(Rect::new(0, 0, 80, 20));
        assert!(inner.width < 80);
        assert_eq!(inner.height, 20);
    }

    #[test]
    fn content_rect_survives_zero_area() {
        assert_eq!(chat_content_rect(Rect::new(0, 0, 0, 0)).width, 0);
    }

    #[test]
    fn scroll_is_clamped() {
        assert_eq!(chat_scroll_offset(5, 10, 20), 0);
        assert_eq!(chat_scroll_offset(100, 50, 20), 30);
        assert_eq!(chat_scroll_offset(10, 50, 20), 10);
    }
}
