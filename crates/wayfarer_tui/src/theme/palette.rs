//! Wayfarer palette: semantic color roles (surfaces, borders, text, states, chrome).
//!
//! Both palettes are built from the travel color constants in
//! `wayfarer_constant::theme` so CLI and TUI stay on the same hues.

use wayfarer_constant::theme;

use super::rgb::Rgb;

/// Whether the palette renders for a dark or light terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Dark,
    Light,
}

/// One full palette for an appearance (dark or light). All colors are semantic roles.
#[derive(Clone, Debug, PartialEq)]
pub struct WayfarerPalette {
    // --- Surfaces
    /// App / window background.
    pub background: Rgb,
    /// Panel, card, chat area.
    pub surface_background: Rgb,

    // --- Borders
    pub border: Rgb,
    pub border_focused: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_placeholder: Rgb,
    pub text_accent: Rgb,

    // --- Semantic
    pub accent: Rgb,
    pub danger: Rgb,
    pub success: Rgb,
    pub warning: Rgb,

    // --- UI chrome
    pub status_bar_background: Rgb,
}

impl WayfarerPalette {
    /// Travel dark palette: the page hues over a night-sea background.
    pub fn travel_dark() -> Self {
        Self {
            background: theme::dark::BACKGROUND.into(),
            surface_background: theme::dark::SURFACE.into(),
            border: theme::dark::BORDER.into(),
            border_focused: theme::dark::PRIMARY.into(),
            text: theme::dark::FOREGROUND.into(),
            text_muted: theme::dark::MUTED_FG.into(),
            text_placeholder: theme::dark::MUTED_FG.into(),
            text_accent: theme::dark::PRIMARY.into(),
            accent: theme::dark::ACCENT.into(),
            danger: theme::dark::DANGER.into(),
            success: theme::dark::SUCCESS.into(),
            warning: theme::dark::WARNING.into(),
            status_bar_background: theme::dark::SURFACE.into(),
        }
    }

    /// Travel light palette: the page's daylight colors.
    pub fn travel_light() -> Self {
        Self {
            background: theme::light::BACKGROUND.into(),
            surface_background: theme::light::SURFACE.into(),
            border: theme::light::BORDER.into(),
            border_focused: theme::light::PRIMARY.into(),
            text: theme::light::FOREGROUND.into(),
            text_muted: theme::light::MUTED_FG.into(),
            text_placeholder: theme::light::MUTED_FG.into(),
            text_accent: theme::light::PRIMARY.into(),
            accent: theme::light::PRIMARY.into(),
            danger: theme::light::DANGER.into(),
            success: theme::light::SUCCESS.into(),
            warning: theme::light::WARNING.into(),
            status_bar_background: theme::light::SURFACE.into(),
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::travel_dark(),
            Appearance::Light => Self::travel_light(),
        }
    }
}

impl Default for WayfarerPalette {
    fn default() -> Self {
        Self::travel_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_and_light_differ() {
        assert_ne!(
            WayfarerPalette::travel_dark(),
            WayfarerPalette::travel_light()
        );
    }

    #[test]
    fn for_appearance_selects_palette() {
        assert_eq!(
            WayfarerPalette::for_appearance(Appearance::Dark),
            WayfarerPalette::travel_dark()
        );
        assert_eq!(
            WayfarerPalette::for_appearance(Appearance::Light),
            WayfarerPalette::travel_light()
        );
    }

    #[test]
    fn accent_matches_travel_primary() {
        let palette = WayfarerPalette::travel_light();
        assert_eq!(palette.accent, Rgb(26, 95, 122));
    }
}
