//! Palette-to-ratatui glue.
//!
//! The theme stays ratatui-free ([crate::theme::Rgb] is a plain triplet);
//! everything that needs a [Style] goes through these helpers so chrome and
//! text colors always come from the active [crate::theme::WayfarerPalette].

use ratatui::style::{Color, Style};

use crate::theme::Rgb;

/// Theme [Rgb] as a ratatui [Color].
#[inline]
pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r(), rgb.g(), rgb.b())
}

/// Foreground-only style in the given palette color.
#[inline]
pub fn fg(rgb: Rgb) -> Style {
    Style::new().fg(color(rgb))
}

/// Background-only style in the given palette color.
#[inline]
pub fn bg(rgb: Rgb) -> Style {
    Style::new().bg(color(rgb))
}
