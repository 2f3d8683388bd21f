//! Shortcut hint line below the input: muted, and aware of what the user is
//! doing right now.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use super::input::INPUT_PADDING_H;
use super::style::fg;
use crate::theme::WayfarerPalette;

/// Horizontal inset so the hints align with the input content above.
const SHORTCUT_INSET_H: u16 = 1 + INPUT_PADDING_H;

/// Rect for the shortcut line, inset to align with the input content.
pub fn shortcut_inner_rect(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(SHORTCUT_INSET_H),
        width: area.width.saturating_sub(SHORTCUT_INSET_H * 2),
        ..area
    }
}

/// Hints for the current situation: a reply in flight, text being typed, or
/// an idle input line.
pub fn shortcut_line(
    palette: &WayfarerPalette,
    is_waiting: bool,
    input_has_text: bool,
) -> Line<'static> {
    let hint = if is_waiting {
        "Waiting for reply…  ·  Ctrl+C: quit"
    } else if input_has_text {
        "Enter: send  ·  Tab: length  ·  Ctrl+U: clear  ·  Ctrl+C: quit"
    } else {
        "↑↓: scroll  ·  Tab: length  ·  Ctrl+N: new session  ·  Ctrl+Y: copy reply  ·  q: quit"
    };
    Line::from(Span::styled(hint, fg(palette.text_muted)))
}
