//! Semantic style builders.

use hdash_core::LogLevel;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green(p: &Palette) -> Style {
    Style::default().fg(p.status_green)
}

pub fn status_red(p: &Palette) -> Style {
    Style::default().fg(p.status_red)
}

pub fn status_yellow(p: &Palette) -> Style {
    Style::default().fg(p.status_yellow)
}

/// Green when `ok`, red otherwise
pub fn badge(p: &Palette, ok: bool) -> Style {
    if ok {
        status_green(p)
    } else {
        status_red(p)
    }
}

/// Style for a log line of the given level
pub fn log_level(p: &Palette, level: Option<LogLevel>) -> Style {
    match level {
        Some(LogLevel::Error) => status_red(p),
        Some(LogLevel::Warning) => status_yellow(p),
        Some(LogLevel::Info) => text_primary(p),
        Some(LogLevel::Debug) => text_muted(p),
        None => text_secondary(p),
    }
}

pub fn selected(p: &Palette) -> Style {
    Style::default().bg(p.selected_bg).fg(p.text_primary)
}

// --- Containers ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border_dim
        }))
        .style(Style::default().bg(p.card_bg))
}

pub fn modal_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.popup_bg))
}
