//! Configuration file parsing for Simon Says
//!
//! Supports:
//! - `config.toml` - timing and game settings
//! - `theme.toml` - optional colors for the view

pub mod settings;
pub mod theme;
pub mod types;

pub use settings::{default_config_dir, init_config_dir, load_settings};
pub use theme::load_theme;
pub use types::*;
