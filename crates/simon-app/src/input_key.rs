//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary,
//! so game handling never depends on terminal-specific types.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, space, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),
    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
}

impl InputKey {
    /// Keys that dismiss a modal dialog
    pub fn is_dismiss(&self) -> bool {
        matches!(self, InputKey::Enter | InputKey::Esc | InputKey::Char(' '))
    }
}
