//! Color palette for the game screen.
//!
//! Theme-driven colors (background, text, accent) come from `theme.toml`;
//! the constants here cover what the theme file does not configure.

use ratatui::style::Color;
use simon_core::Rgb;

// --- Text ---
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_ON_BRIGHT: Color = Color::Black;
pub const TEXT_ON_DARK: Color = Color::White;

// --- Modal ---
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);
pub const DIMMED_FG: Color = Color::Rgb(72, 79, 88);
pub const DIMMED_BG: Color = Color::Rgb(10, 12, 16);
pub const SHADOW: Color = Color::Rgb(5, 6, 8);

// --- Status ---
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);

/// Terminal color for a model color
pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Readable label color on top of `background`
pub fn contrast_text(background: Rgb) -> Color {
    let luma = 299 * u32::from(background.r)
        + 587 * u32::from(background.g)
        + 114 * u32::from(background.b);
    if luma > 128_000 {
        TEXT_ON_BRIGHT
    } else {
        TEXT_ON_DARK
    }
}
