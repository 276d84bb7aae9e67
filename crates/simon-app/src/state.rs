//! Application state (Model in TEA pattern)

use std::collections::HashMap;
use std::time::{Duration, Instant};

use simon_core::{GamePhase, IndexSource, RandomSource, SimonModel, TimerId, TimerQueue};
use tracing::debug;

use crate::config::{Settings, ThemeSettings};
use crate::timing::TimerAction;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Before a game: "Start Game" visible, status prompt shown
    #[default]
    Title,

    /// A game is running: "Quit Game" visible
    InGame,

    /// Modal game-over notice; blocks input until acknowledged
    GameOverDialog,
}

/// Whose move it is during a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Turn {
    /// The sequence is being played back; presses are ignored
    #[default]
    Watching,

    /// The player is reproducing the sequence
    Repeating,
}

/// Summary of the game that just ended, shown in the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    pub expected: usize,
    pub actual: usize,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub model: SimonModel,
    pub ui_mode: UiMode,
    pub turn: Turn,
    pub settings: Settings,
    pub theme: ThemeSettings,

    /// Shared scheduler for playback steps and flashes
    pub timers: TimerQueue<TimerAction>,

    /// Clock as of the last tick; every delay is measured from here
    pub now: Instant,

    /// Best score this session (not persisted)
    pub best_score: u32,

    pub last_game: Option<GameSummary>,

    flash_timers: HashMap<usize, TimerId>,
    quitting: bool,
}

impl AppState {
    /// State with a generator seeded from the settings (or OS entropy)
    pub fn with_settings(settings: Settings, now: Instant) -> Self {
        let source = match settings.game.seed {
            Some(seed) => {
                debug!("Using fixed sequence seed {}", seed);
                RandomSource::seeded(seed)
            }
            None => RandomSource::from_entropy(),
        };
        Self::with_source(settings, source, now)
    }

    /// State with an explicit sequence source
    pub fn with_source(settings: Settings, source: impl IndexSource + 'static, now: Instant) -> Self {
        Self {
            model: SimonModel::new(source),
            ui_mode: UiMode::default(),
            turn: Turn::default(),
            settings,
            theme: ThemeSettings::default(),
            timers: TimerQueue::new(),
            now,
            best_score: 0,
            last_game: None,
            flash_timers: HashMap::new(),
            quitting: false,
        }
    }

    pub fn with_theme(mut self, theme: ThemeSettings) -> Self {
        self.theme = theme;
        self
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    // ─────────────────────────────────────────────────────────
    // Scheduling
    // ─────────────────────────────────────────────────────────

    pub(crate) fn schedule(&mut self, delay: Duration, action: TimerAction) -> TimerId {
        self.timers.schedule(self.now, delay, action)
    }

    pub fn is_playing_back(&self) -> bool {
        self.timers.any(TimerAction::is_playback)
    }

    /// Cancel every pending playback step. Stopping a stopped playback is a no-op.
    pub fn stop_playback(&mut self) {
        let cancelled = self.timers.cancel_where(TimerAction::is_playback);
        if !cancelled.is_empty() {
            debug!("Playback stopped ({} pending step(s) cancelled)", cancelled.len());
        }
    }

    /// Turn a light on for `duration`, then off.
    ///
    /// A flash already running on the same light is superseded: its pending
    /// turn-off is cancelled and the light stays on until the new deadline.
    /// Re-flashing a lit light never switches it off early, so two
    /// overlapping flashes read as one longer flash. Playback keeps its
    /// highlights shorter than the step interval for that reason.
    pub fn flash_light(&mut self, index: usize, duration: Duration) {
        if index >= self.model.light_count() {
            return;
        }
        if let Some(previous) = self.flash_timers.remove(&index) {
            self.timers.cancel(previous);
        }
        self.model.set_light(index, true);
        let id = self.schedule(duration, TimerAction::LightOff { index });
        self.flash_timers.insert(index, id);
    }

    /// Stop a running flash early; the light is forced off either way
    pub fn interrupt_flash(&mut self, index: usize) {
        if let Some(id) = self.flash_timers.remove(&index) {
            self.timers.cancel(id);
        }
        self.model.set_light(index, false);
    }

    pub fn interrupt_all_flashes(&mut self) {
        for index in 0..self.model.light_count() {
            self.interrupt_flash(index);
        }
    }

    /// Called when a `LightOff` timer fires
    pub(crate) fn finish_flash(&mut self, index: usize) {
        self.flash_timers.remove(&index);
        self.model.set_light(index, false);
    }

    // ─────────────────────────────────────────────────────────
    // Presentation helpers
    // ─────────────────────────────────────────────────────────

    /// Text for the status label under the controls
    pub fn status_line(&self) -> String {
        match (self.ui_mode, self.model.phase()) {
            (UiMode::Title, _) => "Press 'Start Game' to play!".to_string(),
            (UiMode::GameOverDialog, _) | (_, GamePhase::GameOver) => "Game Over".to_string(),
            (UiMode::InGame, _) => match self.turn {
                Turn::Watching => "Watch the sequence...".to_string(),
                Turn::Repeating => format!(
                    "Your turn: {} of {}",
                    self.model.cursor(),
                    self.model.game_sequence().len()
                ),
            },
        }
    }

    pub(crate) fn record_best(&mut self) {
        self.best_score = self.best_score.max(self.model.score());
    }
}
