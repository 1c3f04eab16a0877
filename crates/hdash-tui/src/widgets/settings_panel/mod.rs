//! Settings panel widget
//!
//! Renders the controls of the active app's [`PanelSpec`], grouped, with the
//! selected row highlighted, the connection status and whether a save is
//! possible.

mod styles;


use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use hdash_app::settings_form::{
    ConnectionStatus, FieldGroup, FieldKind, FormField, FormValues, PanelSpec, SettingsForm,
};
use hdash_core::AppId;

use crate::theme::{styles as theme_styles, Palette};

pub struct SettingsPanel<'a> {
    form: &'a SettingsForm,
    app: AppId,
    palette: &'a Palette,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(form: &'a SettingsForm, app: AppId, palette: &'a Palette) -> Self {
        Self { form, app, palette }
    }

    /// Content lines plus the index of the selected field's line.
    fn lines(&self) -> (Vec<Line<'static>>, usize) {
        let p = self.palette;
        let panel = PanelSpec::for_app(self.app);
        let values = self.form.values(self.app);
        let selected = self.form.selected_field(self.app);

        let mut lines = Vec::new();
        let mut selected_line = 0;
        let mut group: Option<FieldGroup> = None;

        for &field in panel.fields {
            if group != Some(field.group()) {
                if group.is_some() {
                    lines.push(Line::default());
                }
                group = Some(field.group());
                lines.push(Line::from(Span::styled(
                    field.group().title(),
                    theme_styles::accent_bold(p),
                )));
            }
            let is_selected = selected == Some(field);
            if is_selected {
                selected_line = lines.len();
            }
            lines.push(self.field_line(field, &values, is_selected));
        }

        if !panel.has_tunables() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!(
                    "Hunt settings are managed on the {} panel.",
                    AppId::default().display_name()
                ),
                theme_styles::text_muted(p),
            )));
        }

        lines.push(Line::default());
        lines.push(self.status_line());
        (lines, selected_line)
    }

    fn field_line(&self, field: FormField, values: &FormValues, selected: bool) -> Line<'static> {
        let p = self.palette;
        let editing = self
            .form
            .editing
            .as_ref()
            .filter(|edit| selected && edit.field == field);

        let marker = if selected { "▸ " } else { "  " };
        let mut spans = vec![
            Span::styled(marker, theme_styles::accent(p)),
            Span::styled(
                format!("{:<width$}", field.label(), width = styles::LABEL_WIDTH),
                theme_styles::text_secondary(p),
            ),
        ];

        match (field.kind(), editing) {
            (_, Some(edit)) => {
                spans.push(Span::styled(
                    format!("{}_", edit.buffer),
                    theme_styles::accent_bold(p),
                ));
            }
            (FieldKind::Toggle, None) => {
                spans.push(Span::styled(
                    styles::toggle(values.toggle(field)),
                    theme_styles::text_primary(p),
                ));
            }
            (FieldKind::Secret, None) => {
                spans.push(Span::styled(
                    styles::mask(values.text(field)),
                    theme_styles::text_primary(p),
                ));
            }
            (FieldKind::Text | FieldKind::Integer, None) => {
                spans.push(Span::styled(
                    values.text(field).to_string(),
                    theme_styles::text_primary(p),
                ));
            }
        }

        if let Some(hint) = styles::field_hint(field, values.text(field)) {
            spans.push(Span::styled(format!("  {hint}"), theme_styles::text_muted(p)));
        }

        let line = Line::from(spans);
        if selected {
            line.style(theme_styles::selected(p))
        } else {
            line
        }
    }

    fn status_line(&self) -> Line<'static> {
        let p = self.palette;
        let status = self.form.status(self.app);
        let status_style = match status {
            ConnectionStatus::Configured | ConnectionStatus::Connected => {
                theme_styles::status_green(p)
            }
            ConnectionStatus::Testing => theme_styles::status_yellow(p),
            ConnectionStatus::NotConfigured
            | ConnectionStatus::ConnectionFailed
            | ConnectionStatus::ConnectionError => theme_styles::status_red(p),
        };

        let (save_text, save_style) = if self.form.pending_save.is_some() {
            ("Saving...", theme_styles::status_yellow(p))
        } else if self.form.save_enabled {
            ("Unsaved changes (s to save)", theme_styles::accent_bold(p))
        } else {
            ("No changes", theme_styles::text_muted(p))
        };

        Line::from(vec![
            Span::styled("  Status: ", theme_styles::text_muted(p)),
            Span::styled(status.label(), status_style),
            Span::styled("   │   ", theme_styles::text_muted(p)),
            Span::styled(save_text, save_style),
        ])
    }
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = theme_styles::glass_block(self.palette, true)
            .title(format!(" Settings - {} ", self.app.display_name()));
        let inner_height = area.height.saturating_sub(2) as usize;

        let (lines, selected_line) = self.lines();
        // Keep the selected row on screen
        let offset = (selected_line + 1).saturating_sub(inner_height);

        Paragraph::new(lines)
            .block(block)
            .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0))
            .render(area, buf);
    }
}
