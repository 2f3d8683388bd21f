//! Theme color constants for CLI and TUI.
//!
//! Colors sourced from the travel page stylesheet the app's look is based on
//! (deep teal headers, sky-blue chrome, pale-blue surfaces).
//! Defined as (R, G, B) tuples for use with any terminal color library.

/// Light theme (the page's daylight palette)
pub mod light {
    /// Background — #ffffff
    pub const BACKGROUND: (u8, u8, u8) = (255, 255, 255);
    /// Foreground text — #333333
    pub const FOREGROUND: (u8, u8, u8) = (51, 51, 51);
    /// Surface (chat card) — #e6f3ff
    pub const SURFACE: (u8, u8, u8) = (230, 243, 255);
    /// Primary — #1a5f7a
    pub const PRIMARY: (u8, u8, u8) = (26, 95, 122);
    /// Primary hover / pressed — #0a3d62
    pub const PRIMARY_DEEP: (u8, u8, u8) = (10, 61, 98);
    /// Accent (user bubbles, borders) — #95c8d8
    pub const ACCENT: (u8, u8, u8) = (149, 200, 216);
    /// Muted foreground — #666666
    pub const MUTED_FG: (u8, u8, u8) = (102, 102, 102);
    /// Danger — #df514c
    pub const DANGER: (u8, u8, u8) = (223, 81, 76);
    /// Success — #4caf50
    pub const SUCCESS: (u8, u8, u8) = (76, 175, 80);
    /// Warning — #ff8c00
    pub const WARNING: (u8, u8, u8) = (255, 140, 0);
    /// Border — #95c8d8
    pub const BORDER: (u8, u8, u8) = (149, 200, 216);
}

/// Dark theme (the same hues over a night-sea background)
pub mod dark {
    /// Background — #07141c
    pub const BACKGROUND: (u8, u8, u8) = (7, 20, 28);
    /// Foreground text — #dcebf5
    pub const FOREGROUND: (u8, u8, u8) = (220, 235, 245);
    /// Surface (chat card) — #0d2230
    pub const SURFACE: (u8, u8, u8) = (13, 34, 48);
    /// Primary — #95c8d8
    pub const PRIMARY: (u8, u8, u8) = (149, 200, 216);
    /// Primary deep — #1a5f7a
    pub const PRIMARY_DEEP: (u8, u8, u8) = (26, 95, 122);
    /// Accent — #95c8d8
    pub const ACCENT: (u8, u8, u8) = (149, 200, 216);
    /// Muted foreground — #5f7d8c
    pub const MUTED_FG: (u8, u8, u8) = (95, 125, 140);
    /// Danger — #df514c
    pub const DANGER: (u8, u8, u8) = (223, 81, 76);
    /// Success — #4caf50
    pub const SUCCESS: (u8, u8, u8) = (76, 175, 80);
    /// Warning — #ff8c00
    pub const WARNING: (u8, u8, u8) = (255, 140, 0);
    /// Border — #1a5f7a
    pub const BORDER: (u8, u8, u8) = (26, 95, 122);
}
