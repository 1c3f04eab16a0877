//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use hdash_app::state::{AppState, View};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it should not modify state
/// except for widget state that tracks rendering info (the log viewport).
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let palette = palette::for_mode(state.dark_mode);
    let app = state.active_app();

    let bg_block = Block::default().style(Style::default().bg(palette.deepest_bg));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(state.view, app, palette),
        areas.header,
    );
    frame.render_widget(
        widgets::AppTabs::new(app, &state.configured, palette),
        areas.tabs,
    );

    match state.view {
        View::Home => {
            frame.render_widget(
                widgets::HomePanel::new(
                    &state.configured,
                    app,
                    &state.settings.server.base_url,
                    state.dark_mode,
                    palette,
                ),
                areas.body,
            );
        }
        View::Logs => {
            let rows = widgets::LogView::viewport_rows(areas.body);
            if rows != state.logs.view.visible_rows() {
                state.logs.set_viewport_rows(rows);
            }
            let log_view = widgets::LogView::new(&state.logs, app, palette)
                .status(state.stream.status)
                .configured(state.is_active_configured())
                .show_timestamps(state.settings.ui.show_timestamps);
            frame.render_widget(log_view, areas.body);
        }
        View::Settings => {
            frame.render_widget(
                widgets::SettingsPanel::new(&state.form, app, palette),
                areas.body,
            );
        }
    }

    frame.render_widget(widgets::StatusBar::new(state, palette), areas.status);

    if let Some(dialog) = &state.dialog {
        frame.render_widget(widgets::DialogWidget::new(dialog, palette), area);
    }
}
