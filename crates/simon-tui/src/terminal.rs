//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use simon_core::prelude::*;

/// Install a panic hook that releases the mouse and restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_mouse_capture();
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Report mouse clicks as terminal events
pub fn enable_mouse_capture() -> Result<()> {
    execute!(stdout(), EnableMouseCapture)
        .map_err(|e| Error::terminal(format!("Failed to enable mouse capture: {}", e)))
}

pub fn disable_mouse_capture() -> Result<()> {
    execute!(stdout(), DisableMouseCapture)
        .map_err(|e| Error::TerminalRestore(format!("Failed to disable mouse capture: {}", e)))
}
