//! Status bar widget
//!
//! One row of key hints for the current view and mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use hdash_app::state::{AppState, View};

use crate::theme::{styles, Palette};

type Hint = (&'static str, &'static str);

const GLOBAL_HINTS: &[Hint] = &[
    ("Tab", "view"),
    ("[ ]", "app"),
    ("1-4", "select"),
    ("T", "theme"),
    ("q", "quit"),
];

const HOME_HINTS: &[Hint] = &[("u", "user page")];

const LOGS_HINTS: &[Hint] = &[
    ("j/k", "scroll"),
    ("g/G", "top/bottom"),
    ("a", "auto-scroll"),
    ("c", "clear"),
];

const SETTINGS_HINTS: &[Hint] = &[
    ("j/k", "field"),
    ("Enter", "edit"),
    ("Space", "toggle"),
    ("s", "save"),
    ("t", "test"),
    ("R", "reset"),
];

const EDITING_HINTS: &[Hint] = &[("Enter", "apply"), ("Esc", "cancel")];

/// Status bar widget showing key hints
pub struct StatusBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn hints(&self) -> Vec<Hint> {
        if self.state.dialog.is_some() {
            return Vec::new();
        }
        if self.state.form.editing.is_some() {
            return EDITING_HINTS.to_vec();
        }
        let view_hints = match self.state.view {
            View::Home => HOME_HINTS,
            View::Logs => LOGS_HINTS,
            View::Settings => SETTINGS_HINTS,
        };
        view_hints.iter().chain(GLOBAL_HINTS).copied().collect()
    }

    fn mode_label(&self) -> Span<'static> {
        let p = self.palette;
        if self.state.dialog.is_some() {
            Span::styled(" DIALOG ", styles::status_yellow(p))
        } else if self.state.form.editing.is_some() {
            Span::styled(" EDIT ", styles::accent_bold(p))
        } else {
            Span::styled(
                format!(" {} ", self.state.view.label().to_uppercase()),
                styles::text_secondary(p),
            )
        }
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let p = self.palette;
        let separator = Span::styled(" │ ", styles::text_muted(p));

        let mut segments = vec![self.mode_label()];
        for (key, action) in self.hints() {
            segments.push(separator.clone());
            segments.push(Span::styled(key, styles::accent(p)));
            segments.push(Span::styled(format!(" {action}"), styles::text_muted(p)));
        }
        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(self.build_segments());
        Paragraph::new(line)
            .style(Style::default().bg(self.palette.deepest_bg))
            .render(area, buf);
    }
}
