//! Input bar: rounded bordered block for the message line.

use ratatui::widgets::{Block, BorderType, Borders, Padding};

use super::style::{bg, fg};
use crate::theme::WayfarerPalette;

/// Columns of padding inside the input block, each side.
pub const INPUT_PADDING_H: u16 = 2;

/// Prompt icon at the start of the input line.
pub const INPUT_ICON: &str = "▸ ";

/// The bordered input block. The border brightens while the input accepts
/// text and dims while a reply is in flight.
pub fn block_for_input_bordered(palette: &WayfarerPalette, focused: bool) -> Block<'static> {
    let border_color = if focused {
        palette.border_focused
    } else {
        palette.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(fg(border_color))
        .style(bg(palette.status_bar_background))
        .padding(Padding::horizontal(INPUT_PADDING_H))
}
