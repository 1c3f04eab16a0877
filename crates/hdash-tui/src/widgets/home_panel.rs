//! Home view: per-app configuration badges and backend info

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use hdash_core::{AppId, ConfiguredApps};

use crate::theme::{styles, Palette};

pub struct HomePanel<'a> {
    configured: &'a ConfiguredApps,
    active: AppId,
    base_url: &'a str,
    dark_mode: bool,
    palette: &'a Palette,
}

impl<'a> HomePanel<'a> {
    pub fn new(
        configured: &'a ConfiguredApps,
        active: AppId,
        base_url: &'a str,
        dark_mode: bool,
        palette: &'a Palette,
    ) -> Self {
        Self {
            configured,
            active,
            base_url,
            dark_mode,
            palette,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = vec![
            Line::from(Span::styled("Connection Status", styles::accent_bold(p))),
            Line::default(),
        ];

        for app in AppId::ALL {
            let ok = self.configured.is_configured(app);
            let label = if ok { "Configured" } else { "Not Configured" };
            let marker = if app == self.active { "▸ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(marker, styles::accent(p)),
                Span::styled(format!("{:<10}", app.display_name()), styles::text_primary(p)),
                Span::styled(format!("[{label}]"), styles::badge(p, ok)),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Backend  ", styles::text_muted(p)),
            Span::styled(self.base_url.to_string(), styles::text_secondary(p)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Theme    ", styles::text_muted(p)),
            Span::styled(
                if self.dark_mode { "Dark" } else { "Light" },
                styles::text_secondary(p),
            ),
        ]));
        lines
    }
}

impl Widget for HomePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, true).title(" Home ");
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
