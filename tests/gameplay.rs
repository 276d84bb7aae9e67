//! End-to-end games driven through the app layer with a scripted sequence

use std::time::{Duration, Instant};

use simon_app::config::{self, Settings};
use simon_app::{update, AppState, InputKey, Message, Turn, UiMode};
use simon_core::{GamePhase, ModelEvent, ScriptedSource};

fn new_game(settings: Settings, script: Vec<usize>) -> AppState {
    let mut state = AppState::with_source(settings, ScriptedSource::new(script), Instant::now());
    send(&mut state, Message::Key(InputKey::Enter));
    state
}

/// Feed a message and its follow-ups, the way the terminal loop does
fn send(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

fn wait(state: &mut AppState, delay: Duration) {
    let now = state.now + delay;
    send(state, Message::Tick { now });
}

/// Sit through playback of the whole current sequence
fn watch(state: &mut AppState) {
    let timing = state.settings.timing.clone();
    let length = state.model.game_sequence().len() as u32;
    wait(state, timing.playback_interval() * length + timing.highlight());
    assert_eq!(state.turn, Turn::Repeating);
}

fn press_key(state: &mut AppState, key: char) {
    send(state, Message::Key(InputKey::Char(key)));
}

#[test]
fn test_three_rounds_then_mistake() {
    let mut state = new_game(Settings::default(), vec![0, 3, 1, 2]);

    // Round 1: [red]
    watch(&mut state);
    press_key(&mut state, 'r');
    assert_eq!(state.model.score(), 1);

    // Round 2: [red, blue]
    watch(&mut state);
    press_key(&mut state, '1');
    press_key(&mut state, 'b');
    assert_eq!(state.model.score(), 2);

    // Round 3: [red, blue, yellow], player hits green second
    watch(&mut state);
    assert_eq!(state.model.game_sequence(), &[0, 3, 1]);
    press_key(&mut state, 'r');
    press_key(&mut state, 'g');

    assert_eq!(state.model.phase(), GamePhase::GameOver);
    assert_eq!(state.ui_mode, UiMode::GameOverDialog);
    assert_eq!(state.best_score, 2);
    let summary = state.last_game.expect("game summary");
    assert_eq!((summary.expected, summary.actual), (3, 2));

    // Further presses are swallowed by the dialog
    press_key(&mut state, 'b');
    assert_eq!(state.model.phase(), GamePhase::GameOver);

    send(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.ui_mode, UiMode::Title);
    assert_eq!(state.model.phase(), GamePhase::Idle);
    assert_eq!(state.model.score(), 2);
    assert!(state.timers.is_empty());
}

#[test]
fn test_new_game_after_game_over_resets_score() {
    let mut state = new_game(Settings::default(), vec![2, 1, 0]);
    watch(&mut state);
    press_key(&mut state, 'g');
    watch(&mut state);
    press_key(&mut state, 'y');
    send(&mut state, Message::Key(InputKey::Enter));

    press_key(&mut state, 's');

    assert_eq!(state.ui_mode, UiMode::InGame);
    assert_eq!(state.model.score(), 0);
    assert_eq!(state.model.game_sequence().len(), 1);
    assert_eq!(state.best_score, 1);
}

#[test]
fn test_configured_timing_drives_playback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[timing]\nplayback_interval_ms = 300\nhighlight_ms = 100\nclick_flash_ms = 10\n",
    )
    .unwrap();
    let settings = config::load_settings(dir.path());
    assert_eq!(settings.timing.click_flash(), Duration::from_millis(50));

    let mut state = new_game(settings, vec![1]);

    wait(&mut state, Duration::from_millis(299));
    assert!(!state.model.lights()[1].is_on());
    wait(&mut state, Duration::from_millis(1));
    assert!(state.model.lights()[1].is_on());
    wait(&mut state, Duration::from_millis(100));
    assert!(!state.model.lights()[1].is_on());
    assert_eq!(state.turn, Turn::Repeating);

    // Correct press flashes for the clamped 50ms
    press_key(&mut state, 'y');
    assert!(state.model.lights()[1].is_on());
    wait(&mut state, Duration::from_millis(50));
    assert!(!state.model.lights()[1].is_on());
}

#[test]
fn test_interrupted_flash_emits_on_then_off() {
    let mut state = AppState::with_source(
        Settings::default(),
        ScriptedSource::new([0]),
        Instant::now(),
    );

    state.flash_light(2, Duration::from_millis(100));
    state.interrupt_flash(2);

    let transitions: Vec<bool> = state
        .model
        .drain_events()
        .into_iter()
        .filter_map(|event| match event {
            ModelEvent::LightChanged { index: 2, is_on } => Some(is_on),
            _ => None,
        })
        .collect();
    assert_eq!(transitions, vec![true, false]);

    // The cancelled turn-off never fires
    assert!(state.timers.is_empty());
    wait(&mut state, Duration::from_millis(200));
    assert!(!state.model.lights()[2].is_on());
}

#[test]
fn test_ctrl_c_exits_mid_game() {
    let mut state = new_game(Settings::default(), vec![0]);
    send(&mut state, Message::Key(InputKey::CharCtrl('c')));
    assert!(state.should_quit());
}
