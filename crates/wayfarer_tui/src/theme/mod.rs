//! Wayfarer theme: semantic color palette for the chat TUI.
//!
//! The palette roles (surfaces, borders, text, semantic states, chrome) are
//! filled from the travel color constants in `wayfarer_constant::theme`.
//!
//! # Example
//!
//! ```ignore
//! use wayfarer_tui::theme::{Appearance, WayfarerPalette};
//!
//! let palette = WayfarerPalette::travel_dark();
//! let (r, g, b) = (palette.text.r(), palette.text.g(), palette.text.b());
//!
//! let palette = WayfarerPalette::for_appearance(Appearance::Light);
//! ```

mod palette;
mod rgb;

pub use palette::{Appearance, WayfarerPalette};
pub use rgb::Rgb;
