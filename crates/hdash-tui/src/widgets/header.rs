//! Header bar widget
//!
//! Title on the left, the view tabs on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use hdash_app::state::View;
use hdash_core::AppId;

use crate::theme::{styles, Palette};

/// Main header showing the title, active app and view tabs
pub struct MainHeader<'a> {
    view: View,
    app: AppId,
    palette: &'a Palette,
}

impl<'a> MainHeader<'a> {
    pub fn new(view: View, app: AppId, palette: &'a Palette) -> Self {
        Self { view, app, palette }
    }

    fn view_tabs(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = Vec::new();
        for view in View::ALL {
            let style = if view == self.view {
                styles::accent_bold(p)
            } else {
                styles::text_muted(p)
            };
            spans.push(Span::styled(format!(" {} ", view.label()), style));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("Huntarr", styles::accent_bold(p)),
            Span::raw(" "),
            Span::styled("/", styles::text_muted(p)),
            Span::raw(" "),
            Span::styled(self.app.display_name(), styles::text_secondary(p)),
        ]);
        let tabs = self.view_tabs();

        let tabs_width = tabs.width() as u16;
        Paragraph::new(title).render(inner, buf);

        // Tabs only when they fit beside the title
        if tabs_width + 20 <= inner.width {
            let tabs_area = Rect {
                x: inner.x + inner.width - tabs_width,
                width: tabs_width,
                ..inner
            };
            Paragraph::new(tabs).render(tabs_area, buf);
        }
    }
}
