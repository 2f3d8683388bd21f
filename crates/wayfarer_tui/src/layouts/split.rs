//! Vertical screen regions: fixed header, scrollable body, fixed footer.

use ratatui::layout::Rect;

use crate::utils::horizontal_padding;

/// Header rows: title line plus its bottom border.
pub const HEADER_HEIGHT: u16 = 2;

/// Footer rows: selector line, bordered input (3 rows), shortcut line.
pub const FOOTER_HEIGHT: u16 = 5;

/// The three vertical regions of the main screen.
#[derive(Debug, Clone)]
pub struct MainSplits {
    pub header: Rect,
    /// Chat transcript. Collapses to zero height on tiny terminals.
    pub body: Rect,
    pub footer: Rect,
}

/// Carve `area` into header / body / footer. Header and footer keep their
/// fixed heights; the body takes whatever remains.
pub fn main_splits(area: Rect) -> MainSplits {
    let body_height = area.height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT);
    let mut y = area.y;
    let mut row = |height: u16| {
        let r = Rect { y, height, ..area };
        y = y.saturating_add(height);
        r
    };
    MainSplits {
        header: row(HEADER_HEIGHT),
        body: row(body_height),
        footer: row(FOOTER_HEIGHT),
    }
}

/// [main_splits] with the body inset by the standard horizontal padding.
pub fn main_splits_with_padding(area: Rect) -> MainSplits {
    let splits = main_splits(area);
    MainSplits {
        body: horizontal_padding(splits.body),
        ..splits
    }
}

/// Cut a strip into a `top_height`-row top and the remainder below.
pub fn vertical_split(area: Rect, top_height: u16) -> (Rect, Rect) {
    let top_height = top_height.min(area.height);
    let top = Rect {
        height: top_height,
        ..area
    };
    let bottom = Rect {
        y: area.y.saturating_add(top_height),
        height: area.height - top_height,
        ..area
    };
    (top, bottom)
}
