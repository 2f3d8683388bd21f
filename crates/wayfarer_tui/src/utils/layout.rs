//! Layout helpers for Rects and scrolling.

use ratatui::layout::Rect;

use crate::utils::constants::HORIZONTAL_PADDING;

/// Inset a Rect by the standard horizontal padding, symmetric left/right.
#[inline]
pub fn horizontal_padding(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(HORIZONTAL_PADDING),
        width: area.width.saturating_sub(HORIZONTAL_PADDING * 2),
        ..area
    }
}

/// Clamp a scroll offset so the viewport never runs past the end of the
/// content; the last content line can sit at the bottom of the viewport.
pub fn scroll_with_buffer(offset: usize, content_height: usize, viewport_height: usize) -> usize {
    offset.min(content_height.saturating_sub(viewport_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_padding_shrinks_width_only() {
        let inner = horizontal_padding(Rect::new(0, 0, 80, 20));
        assert_eq!(inner, Rect::new(2, 0, 76, 20));
    }

    #[test]
    fn horizontal_padding_collapses_narrow_area() {
        let inner = horizontal_padding(Rect::new(0, 0, 3, 20));
        assert_eq!(inner.width, 0);
    }

    #[test]
    fn scroll_clamped_to_content() {
        assert_eq!(scroll_with_buffer(5, 10, 20), 0); // fits, no scroll
        assert_eq!(scroll_with_buffer(100, 50, 20), 30); // clamp to max
        assert_eq!(scroll_with_buffer(10, 50, 20), 10); // within range
    }
}
