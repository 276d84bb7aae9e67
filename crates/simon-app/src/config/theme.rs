//! Optional theme file (theme.toml)
//!
//! The theme plays the role of an external stylesheet: if it is missing the
//! game still runs with default colors, and the absence is only logged.

use super::types::{ThemeFile, ThemeSettings};
use simon_core::prelude::*;
use simon_core::Rgb;
use std::path::Path;

pub(crate) const THEME_FILENAME: &str = "theme.toml";

/// Load `config_dir/theme.toml`, falling back to defaults per field
pub fn load_theme(config_dir: &Path) -> ThemeSettings {
    let theme_path = config_dir.join(THEME_FILENAME);
    let defaults = ThemeSettings::default();

    let content = match std::fs::read_to_string(&theme_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Could not find {}, using default styling", theme_path.display());
            return defaults;
        }
        Err(e) => {
            warn!("Failed to read {}: {}", theme_path.display(), e);
            return defaults;
        }
    };

    let file: ThemeFile = match toml::from_str(&content) {
        Ok(file) => file,
        Err(e) => {
            warn!("Failed to parse {}: {}", theme_path.display(), e);
            return defaults;
        }
    };

    debug!("Loaded theme from {}", theme_path.display());
    ThemeSettings {
        background: resolve("background", file.background, defaults.background),
        text: resolve("text", file.text, defaults.text),
        accent: resolve("accent", file.accent, defaults.accent),
    }
}

fn resolve(field: &str, value: Option<String>, fallback: Rgb) -> Rgb {
    let Some(value) = value else {
        return fallback;
    };
    Rgb::from_hex(&value).unwrap_or_else(|| {
        warn!("Ignoring theme color {} = {:?}: expected #rrggbb", field, value);
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_theme_is_not_fatal() {
        let temp = tempdir().unwrap();
        assert_eq!(load_theme(temp.path()), ThemeSettings::default());
    }

    #[test]
    fn test_theme_overrides_fields() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join("theme.toml"),
            "background = \"#000000\"\naccent = \"ff8800\"\n",
        )
        .unwrap();

        let theme = load_theme(temp.path());

        assert_eq!(theme.background, Rgb::new(0, 0, 0));
        assert_eq!(theme.accent, Rgb::new(0xff, 0x88, 0x00));
        assert_eq!(theme.text, ThemeSettings::default().text);
    }

    #[test]
    fn test_bad_color_falls_back_per_field() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join("theme.toml"),
            "background = \"navy\"\ntext = \"#101010\"\n",
        )
        .unwrap();

        let theme = load_theme(temp.path());

        assert_eq!(theme.background, ThemeSettings::default().background);
        assert_eq!(theme.text, Rgb::new(0x10, 0x10, 0x10));
    }

    #[test]
    fn test_unparseable_theme_uses_defaults() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("theme.toml"), "background = [").unwrap();
        assert_eq!(load_theme(temp.path()), ThemeSettings::default());
    }
}
