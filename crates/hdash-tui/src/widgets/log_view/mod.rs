//! Log pane widget

mod styles;


use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use hdash_app::log_stream::StreamStatus;
use hdash_app::log_view_state::LogPane;
use hdash_core::AppId;

use crate::theme::{styles as theme_styles, Palette};

/// Rows taken by the pane's border
pub const BORDER_ROWS: u16 = 2;

/// Renders the visible slice of a [`LogPane`]. The pane's viewport must
/// already match the area (see [`LogView::viewport_rows`]).
pub struct LogView<'a> {
    pane: &'a LogPane,
    app: AppId,
    status: StreamStatus,
    configured: bool,
    show_timestamps: bool,
    palette: &'a Palette,
}

impl<'a> LogView<'a> {
    pub fn new(pane: &'a LogPane, app: AppId, palette: &'a Palette) -> Self {
        Self {
            pane,
            app,
            status: StreamStatus::Disconnected,
            configured: false,
            show_timestamps: true,
            palette,
        }
    }

    pub fn status(mut self, status: StreamStatus) -> Self {
        self.status = status;
        self
    }

    pub fn configured(mut self, configured: bool) -> Self {
        self.configured = configured;
        self
    }

    pub fn show_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = show;
        self
    }

    /// Rows available for log lines inside `area`
    pub fn viewport_rows(area: Rect) -> usize {
        area.height.saturating_sub(BORDER_ROWS) as usize
    }

    fn status_title(&self) -> Line<'static> {
        let p = self.palette;
        let connected = self.status == StreamStatus::Connected;
        let icon = if connected { "●" } else { "○" };
        Line::from(vec![
            Span::styled(format!(" {icon} "), theme_styles::badge(p, connected)),
            Span::styled(
                format!("{} ", self.status.label()),
                theme_styles::badge(p, connected),
            ),
        ])
        .right_aligned()
    }

    fn footer(&self) -> Line<'static> {
        let p = self.palette;
        let auto = if self.pane.view.auto_scroll { "on" } else { "off" };
        Line::from(vec![
            Span::styled(format!(" {} lines ", self.pane.len()), theme_styles::text_muted(p)),
            Span::styled("│", theme_styles::text_muted(p)),
            Span::styled(format!(" auto-scroll {auto} "), theme_styles::text_secondary(p)),
        ])
    }

    fn empty_hint(&self) -> Line<'static> {
        let p = self.palette;
        let text = if self.configured {
            "Waiting for log lines...".to_string()
        } else {
            format!(
                "{} is not configured. Add its API URL and key in Settings.",
                self.app.display_name()
            )
        };
        Line::from(Span::styled(text, theme_styles::text_muted(p)))
    }
}

impl Widget for LogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = theme_styles::glass_block(p, true)
            .title(format!(" Logs - {} ", self.app.display_name()))
            .title_top(self.status_title())
            .title_bottom(self.footer());

        let rows = Self::viewport_rows(area);
        let lines: Vec<Line> = if self.pane.is_empty() {
            vec![self.empty_hint()]
        } else {
            self.pane
                .entries
                .iter()
                .skip(self.pane.view.first_visible_row())
                .take(rows)
                .map(|entry| styles::entry_line(entry, self.show_timestamps, p))
                .collect()
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
