//! TUI spacing and sizing constants.

/// Horizontal padding in characters (each side).
pub const HORIZONTAL_PADDING: u16 = 2;

/// Left indent for message continuation lines (two spaces).
pub const LEFT_PADDING: &str = "  ";

/// Blank lines between message blocks.
pub const MESSAGE_SPACING_LINES: usize = 1;
