//! Simon game state machine (Model)
//!
//! [`SimonModel`] owns the lights, the growing game sequence, the player's
//! progress buffer and the score. The length of the progress buffer is the
//! single cursor into the sequence; nothing else tracks the player's position.

use std::fmt;

use crate::error::{Error, Result};
use crate::events::ModelEvent;
use crate::light::{Light, LightColor, Rgb};
use crate::sequence::IndexSource;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// No game has started, or the last one was dismissed
    #[default]
    Idle,
    /// A sequence exists and input is being accepted
    Playing,
    /// The player pressed the wrong light; the final score is still readable
    GameOver,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::Idle => write!(f, "idle"),
            GamePhase::Playing => write!(f, "playing"),
            GamePhase::GameOver => write!(f, "game over"),
        }
    }
}

/// What happened to a single press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// No game in progress; the press was dropped
    Ignored,
    /// Matched the element at `position`, more remain in this round
    Accepted { position: usize },
    /// Matched the whole sequence; the sequence grew by one
    RoundComplete { score: u32 },
    /// Diverged from the sequence; the game is over
    Mismatch {
        position: usize,
        expected: usize,
        actual: usize,
    },
}

pub struct SimonModel {
    lights: Vec<Light>,
    game_sequence: Vec<usize>,
    user_sequence: Vec<usize>,
    score: u32,
    phase: GamePhase,
    source: Box<dyn IndexSource>,
    events: Vec<ModelEvent>,
}

impl fmt::Debug for SimonModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimonModel")
            .field("lights", &self.lights)
            .field("game_sequence", &self.game_sequence)
            .field("user_sequence", &self.user_sequence)
            .field("score", &self.score)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl SimonModel {
    /// Standard four-light board using [`LightColor::ALL`]
    pub fn new(source: impl IndexSource + 'static) -> Self {
        Self::build(
            LightColor::ALL.iter().map(|c| Light::from(*c)).collect(),
            Box::new(source),
        )
    }

    /// Board with a custom palette, one light per color
    pub fn with_lights(colors: &[Rgb], source: impl IndexSource + 'static) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::InvalidPalette);
        }
        Ok(Self::build(
            colors.iter().map(|c| Light::new(*c)).collect(),
            Box::new(source),
        ))
    }

    fn build(lights: Vec<Light>, source: Box<dyn IndexSource>) -> Self {
        Self {
            lights,
            game_sequence: Vec::new(),
            user_sequence: Vec::new(),
            score: 0,
            phase: GamePhase::Idle,
            source,
            events: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Game lifecycle
    // ─────────────────────────────────────────────────────────

    /// Reset sequences and score and begin a fresh round with one element
    pub fn start_new_game(&mut self) {
        self.game_sequence.clear();
        self.user_sequence.clear();
        self.set_score(0);
        self.set_phase(GamePhase::Playing);
        self.generate_next_in_sequence();
    }

    /// Leave any game and return to idle. The last score stays readable.
    pub fn reset(&mut self) {
        self.game_sequence.clear();
        self.user_sequence.clear();
        self.set_phase(GamePhase::Idle);
    }

    /// Append one uniformly random light index to the game sequence
    pub fn generate_next_in_sequence(&mut self) {
        let index = self.source.next_index(self.lights.len());
        self.game_sequence.push(index);
        self.events.push(ModelEvent::SequenceExtended {
            index,
            length: self.game_sequence.len(),
        });
    }

    /// Alias of [`generate_next_in_sequence`](Self::generate_next_in_sequence)
    pub fn extend_sequence(&mut self) {
        self.generate_next_in_sequence();
    }

    /// Record one press and adjudicate it against the sequence
    pub fn add_user_input(&mut self, light_index: usize) -> InputOutcome {
        if !self.is_in_progress() {
            return InputOutcome::Ignored;
        }

        self.user_sequence.push(light_index);

        if let Some(position) = self.first_mismatch() {
            let expected = self.game_sequence[position];
            let actual = self.user_sequence[position];
            self.events.push(ModelEvent::Mismatch {
                position,
                expected,
                actual,
            });
            self.set_phase(GamePhase::GameOver);
            return InputOutcome::Mismatch {
                position,
                expected,
                actual,
            };
        }

        let position = self.user_sequence.len() - 1;
        self.events.push(ModelEvent::InputAccepted { position });

        if self.user_sequence.len() == self.game_sequence.len() {
            self.user_sequence.clear();
            self.set_score(self.score + 1);
            self.generate_next_in_sequence();
            return InputOutcome::RoundComplete { score: self.score };
        }

        InputOutcome::Accepted { position }
    }

    /// Position of the first element where the player diverged, if any
    fn first_mismatch(&self) -> Option<usize> {
        self.user_sequence
            .iter()
            .zip(&self.game_sequence)
            .position(|(user, game)| user != game)
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            self.events.push(ModelEvent::PhaseChanged {
                from: self.phase,
                to: phase,
            });
            self.phase = phase;
        }
    }

    fn set_score(&mut self, score: u32) {
        if self.score != score {
            self.score = score;
            self.events.push(ModelEvent::ScoreChanged { score });
        }
    }

    // ─────────────────────────────────────────────────────────
    // Light control
    // ─────────────────────────────────────────────────────────

    /// Switch a light on or off. Returns `true` if its state changed;
    /// out-of-range indices are ignored.
    pub fn set_light(&mut self, index: usize, on: bool) -> bool {
        let Some(light) = self.lights.get_mut(index) else {
            return false;
        };
        let changed = light.set_on(on);
        if changed {
            self.events.push(ModelEvent::LightChanged { index, is_on: on });
        }
        changed
    }

    /// Flip a light. Returns the new state, or `None` for an unknown index.
    pub fn toggle_light(&mut self, index: usize) -> Option<bool> {
        let is_on = self.lights.get_mut(index)?.toggle();
        self.events.push(ModelEvent::LightChanged { index, is_on });
        Some(is_on)
    }

    pub fn all_lights_off(&mut self) {
        for index in 0..self.lights.len() {
            self.set_light(index, false);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn light(&self, index: usize) -> Option<&Light> {
        self.lights.get(index)
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn game_sequence(&self) -> &[usize] {
        &self.game_sequence
    }

    pub fn user_sequence(&self) -> &[usize] {
        &self.user_sequence
    }

    /// How many elements of the current sequence the player has reproduced
    pub fn cursor(&self) -> usize {
        self.user_sequence.len()
    }

    /// The light the player must press next, while a game is in progress
    pub fn expected_next(&self) -> Option<usize> {
        if !self.is_in_progress() {
            return None;
        }
        self.game_sequence.get(self.cursor()).copied()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_in_progress(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Take every change recorded since the last call
    pub fn drain_events(&mut self) -> Vec<ModelEvent> {
        std::mem::take(&mut self.events)
    }

    /// Replace the game sequence and begin playing it. Used for replays and tests.
    pub fn seed_sequence(&mut self, sequence: impl IntoIterator<Item = usize>) {
        let count = self.lights.len();
        self.game_sequence = sequence.into_iter().map(|i| i % count).collect();
        self.user_sequence.clear();
        let phase = if self.game_sequence.is_empty() {
            GamePhase::Idle
        } else {
            GamePhase::Playing
        };
        self.set_phase(phase);
    }
}
