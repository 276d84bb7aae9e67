//! Configuration types for Simon Says
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `TimingSettings`, `GameSettings` - its sections
//! - `ThemeSettings` - resolved colors from the optional `theme.toml`

use serde::{Deserialize, Serialize};
use simon_core::Rgb;
use std::time::Duration;

/// Shortest delay any timing setting may resolve to
pub const MIN_TIMING_MS: u64 = 50;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub timing: TimingSettings,

    #[serde(default)]
    pub game: GameSettings,
}

/// Playback and flash cadence
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimingSettings {
    /// Spacing between highlights while replaying the sequence
    #[serde(default = "default_playback_interval_ms")]
    pub playback_interval_ms: u64,

    /// How long each highlight stays visible during playback
    #[serde(default = "default_highlight_ms")]
    pub highlight_ms: u64,

    /// How long a correctly pressed light flashes
    #[serde(default = "default_click_flash_ms")]
    pub click_flash_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            playback_interval_ms: default_playback_interval_ms(),
            highlight_ms: default_highlight_ms(),
            click_flash_ms: default_click_flash_ms(),
        }
    }
}

fn default_playback_interval_ms() -> u64 {
    2000
}

fn default_highlight_ms() -> u64 {
    1000
}

fn default_click_flash_ms() -> u64 {
    500
}

fn clamped(ms: u64) -> Duration {
    Duration::from_millis(ms.max(MIN_TIMING_MS))
}

impl TimingSettings {
    /// Never shorter than two minimum delays, so a highlight and the dark
    /// gap after it both fit in one step
    pub fn playback_interval(&self) -> Duration {
        Duration::from_millis(self.playback_interval_ms.max(2 * MIN_TIMING_MS))
    }

    /// Ends at least `MIN_TIMING_MS` before the next playback step, so a
    /// light repeated in the sequence goes dark between its highlights
    pub fn highlight(&self) -> Duration {
        let ceiling = self.playback_interval() - Duration::from_millis(MIN_TIMING_MS);
        clamped(self.highlight_ms).min(ceiling)
    }

    pub fn click_flash(&self) -> Duration {
        clamped(self.click_flash_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameSettings {
    /// Fixed seed for the sequence generator; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Colors applied by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSettings {
    pub background: Rgb,
    pub text: Rgb,
    pub accent: Rgb,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            background: Rgb::new(0x15, 0x22, 0x38),
            text: Rgb::new(0xff, 0xff, 0xff),
            accent: Rgb::new(0x58, 0xa6, 0xff),
        }
    }
}

/// Raw `theme.toml` contents; every field is an optional `#rrggbb` string
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ThemeFile {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
}
