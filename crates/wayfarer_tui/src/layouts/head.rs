//! Header bar: bold title on the left, a status dot and text on the right,
//! bottom border underneath.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::style::{bg, fg};
use crate::theme::{Rgb, WayfarerPalette};
use crate::utils::horizontal_padding;

/// Status shown when nothing else is going on.
pub const HEADER_STATUS_READY: &str = "Ready";

/// Pick the status dot color: red on error, yellow while a reply is in
/// flight, green otherwise.
fn dot_color(palette: &WayfarerPalette, is_waiting: bool, has_error: bool) -> Rgb {
    if has_error {
        palette.danger
    } else if is_waiting {
        palette.warning
    } else {
        palette.success
    }
}

/// Compose the title line: bold title, spacer gap, "● status" right-aligned
/// within `width` columns.
pub fn header_line(
    title: &str,
    status: &str,
    is_waiting: bool,
    has_error: bool,
    palette: &WayfarerPalette,
    width: u16,
) -> Line<'static> {
    let used = title.chars().count() + 1 + 2 + status.chars().count();
    let gap = (width as usize).saturating_sub(used);

    Line::from(vec![
        Span::styled(
            title.to_string(),
            fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(gap)),
        Span::styled(
            "● ".to_string(),
            fg(dot_color(palette, is_waiting, has_error)),
        ),
        Span::styled(status.to_string(), fg(palette.text_muted)),
    ])
}

/// Draw the two-row header into `area`.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    palette: &WayfarerPalette,
    title: &str,
    status: &str,
    is_waiting: bool,
    has_error: bool,
) {
    let chrome = bg(palette.status_bar_background);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(fg(palette.border))
        .style(chrome);
    frame.render_widget(block, area);

    let inner = horizontal_padding(area);
    let line = header_line(title, status, is_waiting, has_error, palette, inner.width);
    frame.render_widget(Paragraph::new(line).style(chrome), inner);
}
