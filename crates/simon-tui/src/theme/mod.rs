//! Colors and styles for the game screen.
//!
//! - `palette` - Fixed colors and conversion from [`simon_core::Rgb`]
//! - `styles` - Style builders driven by the loaded `ThemeSettings`

pub mod palette;
pub mod styles;
