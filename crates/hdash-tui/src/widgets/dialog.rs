//! Alert and confirmation dialog

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use hdash_app::dialog::Dialog;

use super::modal_overlay;
use crate::theme::{styles, Palette};

const DIALOG_WIDTH: u16 = 60;

pub struct DialogWidget<'a> {
    dialog: &'a Dialog,
    palette: &'a Palette,
}

impl<'a> DialogWidget<'a> {
    pub fn new(dialog: &'a Dialog, palette: &'a Palette) -> Self {
        Self { dialog, palette }
    }

    fn hint(&self) -> Line<'static> {
        let p = self.palette;
        if self.dialog.is_confirm() {
            Line::from(vec![
                Span::styled("[y]", styles::accent_bold(p)),
                Span::styled(" Confirm   ", styles::text_secondary(p)),
                Span::styled("[n]", styles::accent_bold(p)),
                Span::styled(" Cancel", styles::text_secondary(p)),
            ])
        } else {
            Line::from(vec![
                Span::styled("[Enter]", styles::accent_bold(p)),
                Span::styled(" OK", styles::text_secondary(p)),
            ])
        }
    }

    /// Rows needed for `width`, borders included
    fn height_for(&self, width: u16) -> u16 {
        let text_width = usize::from(width.saturating_sub(4)).max(1);
        let chars = self.dialog.message().chars().count();
        let message_rows = chars.div_ceil(text_width).max(1);
        // Borders, padding row, message, padding row, hint
        u16::try_from(message_rows).unwrap_or(u16::MAX).saturating_add(5)
    }
}

impl Widget for DialogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        modal_overlay::dim_background(buf, area, p);

        let width = DIALOG_WIDTH.min(area.width);
        let rect = modal_overlay::centered_rect(width, self.height_for(width), area);
        modal_overlay::clear_area(buf, rect);

        let block = styles::modal_block(p).title(Span::styled(
            format!(" {} ", self.dialog.title()),
            styles::accent_bold(p),
        ));

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                self.dialog.message().to_string(),
                styles::text_primary(p),
            )),
            Line::default(),
            self.hint().alignment(Alignment::Center),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .render(rect, buf);
    }
}
