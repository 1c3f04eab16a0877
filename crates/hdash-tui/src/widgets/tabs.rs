//! App tabs: one tab per managed app

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use hdash_core::{AppId, ConfiguredApps};

use crate::theme::{styles, Palette};

/// Tab row for the App/Tab Selector
pub struct AppTabs<'a> {
    active: AppId,
    configured: &'a ConfiguredApps,
    palette: &'a Palette,
}

impl<'a> AppTabs<'a> {
    pub fn new(active: AppId, configured: &'a ConfiguredApps, palette: &'a Palette) -> Self {
        Self {
            active,
            configured,
            palette,
        }
    }

    pub fn tab_titles(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        AppId::ALL
            .iter()
            .map(|app| {
                let ok = self.configured.is_configured(*app);
                let icon = if ok { "●" } else { "○" };
                Line::from(vec![
                    Span::styled(format!("{} ", app.index() + 1), styles::text_muted(p)),
                    Span::styled(icon, styles::badge(p, ok)),
                    Span::raw(format!(" {}", app.display_name())),
                ])
            })
            .collect()
    }
}

impl Widget for AppTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        Tabs::new(self.tab_titles())
            .select(self.active.index())
            .style(styles::text_secondary(p))
            .highlight_style(styles::accent_bold(p))
            .divider(Span::styled("│", styles::text_muted(p)))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, render_widget};
    use crate::theme::palette;

    #[test]
    fn test_tabs_show_every_app() {
        let configured = ConfiguredApps::default();
        let tabs = AppTabs::new(AppId::Sonarr, &configured, &palette::DARK);
        let text = buffer_text(&render_widget(tabs, 80, 1));

        for app in AppId::ALL {
            assert!(text.contains(app.display_name()));
        }
    }

    #[test]
    fn test_configured_app_has_filled_dot() {
        let configured = ConfiguredApps {
            lidarr: true,
            ..Default::default()
        };
        let tabs = AppTabs::new(AppId::Lidarr, &configured, &palette::DARK);
        let titles = tabs.tab_titles();

        let lidarr: String = titles[2].spans.iter().map(|s| s.content.to_string()).collect();
        let sonarr: String = titles[0].spans.iter().map(|s| s.content.to_string()).collect();
        assert!(lidarr.contains('●'));
        assert!(sonarr.contains('○'));
    }
}
