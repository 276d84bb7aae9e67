//! Termination signals routed into the message loop

use simon_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Listen for SIGINT/SIGTERM (Ctrl+C on Windows) in the background.
///
/// The first signal becomes a single `Message::Quit` on `tx`, so the game
/// loop can restore the terminal before exiting.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match wait_for_termination().await {
            Ok(name) => {
                info!("Received {}, shutting down", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Game loop already gone, dropping quit");
                }
            }
            Err(e) => error!("Signal listener failed: {}", e),
        }
    });
}

/// Resolve with the name of the first termination signal received
async fn wait_for_termination() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut interrupt = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Cannot listen for SIGINT: {}", e)))?;
        let mut terminate = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Cannot listen for SIGTERM: {}", e)))?;

        let name = tokio::select! {
            _ = interrupt.recv() => "SIGINT",
            _ = terminate.recv() => "SIGTERM",
        };
        Ok(name)
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {}", e)))?;
        Ok("Ctrl+C")
    }
}
