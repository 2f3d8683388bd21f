//! Length selector line: the fixed three-way reply-length choice, rendered
//! above the input. Exactly one option is active at any time; Tab cycles.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use wayfarer_core::LengthPreference;

use super::input::INPUT_PADDING_H;
use super::style::fg;
use crate::theme::WayfarerPalette;

/// Horizontal inset so the selector aligns with the input content below
/// (input border + input padding).
const SELECTOR_INSET_H: u16 = 1 + INPUT_PADDING_H;

/// Rect for the selector line, inset to align with the input content.
pub fn selector_inner_rect(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(SELECTOR_INSET_H),
        width: area.width.saturating_sub(SELECTOR_INSET_H * 2),
        ..area
    }
}

/// Build the selector line: "Length  ● Concise  ○ Moderate  ○ Explained".
/// The selected option is accented and bold; the others muted.
pub fn selector_line(palette: &WayfarerPalette, selected: LengthPreference) -> Line<'static> {
    let muted = fg(palette.text_muted);
    let mut spans = vec![Span::styled("Length".to_string(), muted)];

    for preference in LengthPreference::ALL {
        spans.push(Span::raw("  "));
        let span = if preference == selected {
            Span::styled(
                format!("● {}", preference.label()),
                fg(palette.accent).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!("○ {}", preference.label()), muted)
        };
        spans.push(span);
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn selector_shows_all_three_options() {
        let palette = WayfarerPalette::travel_dark();
        let line = selector_line(&palette, LengthPreference::Moderate);
        let text = line_text(&line);
        assert!(text.contains("Concise"));
        assert!(text.contains("Moderate"));
        assert!(text.contains("Explained"));
    }

    #[test]
    fn selector_marks_exactly_one_active() {
        let palette = WayfarerPalette::travel_dark();
        for selected in LengthPreference::ALL {
            let line = selector_line(&palette, selected);
            let text = line_text(&line);
            assert_eq!(text.matches('●').count(), 1);
            assert_eq!(text.matches('○').count(), 2);
            assert!(text.contains(&format!("● {}", selected.label())));
        }
    }

    #[test]
    fn selector_inner_rect_zero_width() {
        let inner = selector_inner_rect(Rect::new(0, 0, 0, 1));
        assert_eq!(inner.width, 0);
    }
}
