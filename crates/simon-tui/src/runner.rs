//! Main TUI runner - entry point and event loop

use std::time::Instant;

use ratatui::layout::Rect;
use simon_app::config::{Settings, ThemeSettings};
use simon_app::{signals, update, AppState, Message};
use simon_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the game until the player exits or a termination signal arrives
pub async fn run(settings: Settings, theme: ThemeSettings) -> Result<()> {
    terminal::install_panic_hook();

    let mut state = AppState::with_settings(settings, Instant::now()).with_theme(theme);

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("{}; keyboard only", e);
    }

    // External messages (signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    info!("Game loop started");
    let result = run_loop(&mut term, &mut state, msg_rx);

    if let Err(e) = terminal::disable_mouse_capture() {
        warn!("{}", e);
    }
    ratatui::restore();

    info!(
        "Game loop finished (score {}, best {})",
        state.model.score(),
        state.best_score
    );
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        // Timers fire on the loop's clock, whether or not input arrived
        process_message(state, Message::Tick { now: Instant::now() });

        terminal.draw(|frame| render::view(frame, state))?;

        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        if let Some(message) = event::poll(state, area)? {
            process_message(state, message);
        }
    }

    Ok(())
}

/// Run a message and every follow-up it produces through `update`
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}
