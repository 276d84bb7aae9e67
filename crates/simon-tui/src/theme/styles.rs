//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use simon_app::config::ThemeSettings;

use super::palette;

// --- Text styles ---
pub fn background(theme: &ThemeSettings) -> Style {
    Style::default().bg(palette::rgb(theme.background))
}

pub fn text(theme: &ThemeSettings) -> Style {
    Style::default().fg(palette::rgb(theme.text))
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent(theme: &ThemeSettings) -> Style {
    Style::default().fg(palette::rgb(theme.accent))
}

pub fn accent_bold(theme: &ThemeSettings) -> Style {
    accent(theme).add_modifier(Modifier::BOLD)
}

/// Filled button: background in the accent color
pub fn button(theme: &ThemeSettings) -> Style {
    Style::default()
        .fg(palette::contrast_text(theme.accent))
        .bg(palette::rgb(theme.accent))
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(theme: &ThemeSettings) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(text_muted())
        .style(background(theme))
}

pub fn modal_block<'a>(title: &'a str, theme: &ThemeSettings) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::STATUS_RED))
        .style(text(theme).bg(palette::POPUP_BG))
}
