//! Simon Says - terminal memory game
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use simon_app::config;
use tracing::info;

/// Simon Says - repeat the growing sequence of lights
#[derive(Parser, Debug)]
#[command(name = "simon")]
#[command(about = "A terminal Simon Says memory game", long_about = None)]
struct Args {
    /// Fixed seed for the light sequence (overrides config.toml)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory holding config.toml and theme.toml
    #[arg(long, value_name = "PATH")]
    config_dir: Option<PathBuf>,

    /// Write default config.toml and theme.toml, then exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config_dir = args.config_dir.unwrap_or_else(config::default_config_dir);

    if args.init_config {
        let written = config::init_config_dir(&config_dir)?;
        if written.is_empty() {
            eprintln!("Config already present in {}", config_dir.display());
        }
        for path in written {
            eprintln!("Wrote {}", path.display());
        }
        return Ok(());
    }

    simon_core::logging::init()?;

    let mut settings = config::load_settings(&config_dir);
    if let Some(seed) = args.seed {
        settings.game.seed = Some(seed);
    }
    let theme = config::load_theme(&config_dir);
    info!(
        "Loaded settings from {}: {:?}",
        config_dir.display(),
        settings
    );

    simon_tui::run(settings, theme).await?;
    Ok(())
}
