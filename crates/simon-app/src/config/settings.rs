//! Settings loader for config.toml

use super::types::Settings;
use simon_core::prelude::*;
use std::path::{Path, PathBuf};

pub(crate) const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "simon-says";

/// Default configuration directory (`~/.config/simon-says` on Linux)
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Load settings from `config_dir/config.toml`.
///
/// A missing or unreadable file yields defaults; nothing here is fatal.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write default `config.toml` and `theme.toml` into `config_dir`.
///
/// Existing files are left untouched. Returns the paths that were created.
pub fn init_config_dir(config_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(config_dir)
        .map_err(|e| Error::config(format!("Failed to create {}: {}", config_dir.display(), e)))?;

    let mut created = Vec::new();

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Simon Says Configuration

[timing]
playback_interval_ms = 2000   # Spacing between highlights during playback
highlight_ms = 1000           # How long each playback highlight stays lit
click_flash_ms = 500          # Flash length for a correct press

[game]
# seed = 42                   # Fixed seed for reproducible sequences
"#;
        std::fs::write(&config_path, default_content).context("Writing default config.toml")?;
        info!("Created {:?}", config_path);
        created.push(config_path);
    }

    let theme_path = config_dir.join(super::theme::THEME_FILENAME);
    if !theme_path.exists() {
        let default_theme = r##"# Simon Says Theme

background = "#152238"
text = "#ffffff"
accent = "#58a6ff"
"##;
        std::fs::write(&theme_path, default_theme).context("Writing default theme.toml")?;
        info!("Created {:?}", theme_path);
        created.push(theme_path);
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.timing.playback_interval_ms, 2000);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let config = r#"
[timing]
playback_interval_ms = 800
click_flash_ms = 200

[game]
seed = 7
"#;
        std::fs::write(temp.path().join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.timing.playback_interval_ms, 800);
        assert_eq!(settings.timing.highlight_ms, 1000);
        assert_eq!(settings.timing.click_flash_ms, 200);
        assert_eq!(settings.game.seed, Some(7));
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("config.toml"), "not valid toml {{{{").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_dir_creates_files() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("nested").join("simon-says");

        let created = init_config_dir(&dir).unwrap();

        assert_eq!(created.len(), 2);
        assert!(dir.join("config.toml").exists());
        assert!(dir.join("theme.toml").exists());

        // Generated file parses back to defaults
        assert_eq!(load_settings(&dir), Settings::default());
    }

    #[test]
    fn test_init_config_dir_preserves_existing() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("config.toml"), "[game]\nseed = 3\n").unwrap();

        let created = init_config_dir(temp.path()).unwrap();

        assert_eq!(created, vec![temp.path().join("theme.toml")]);
        assert_eq!(load_settings(temp.path()).game.seed, Some(3));
    }

    #[test]
    fn test_default_config_dir_is_app_specific() {
        assert!(default_config_dir().ends_with("simon-says"));
    }
}
