//! View switching and app selection handlers

use hdash_core::prelude::*;
use hdash_core::{AppId, ConfiguredApps};

use crate::log_stream::{StreamPhase, StreamStatus};
use crate::message::Message;
use crate::state::{AppState, View};

use super::{UpdateAction, UpdateResult};

/// Enter `view` and run its entry effects.
pub fn handle_switch_view(state: &mut AppState, view: View) -> UpdateResult {
    debug!("Switching to {} view", view);
    state.view = view;
    state.form.cancel_edit();

    match view {
        View::Home => UpdateResult::action(UpdateAction::RefreshConfiguredApps),
        View::Logs => {
            let app = state.active_app();
            let configured = state.is_active_configured();
            state.stream.status = StreamStatus::from_configured(configured);
            match state.stream.open(app, configured) {
                Some(generation) => UpdateResult::action(UpdateAction::OpenStream { app, generation }),
                None => UpdateResult::none(),
            }
        }
        View::Settings => {
            let app = state.active_app();
            state.form.clamp_selection(app);
            UpdateResult::action(UpdateAction::LoadSettings { app })
        }
    }
}

/// Tab selection of `app`.
///
/// The settings panel follows the active app on its own. On a real change
/// this reloads settings and, with the logs view visible, clears the pane
/// and either replaces the stream or closes it.
pub fn handle_select_app(state: &mut AppState, app: AppId) -> UpdateResult {
    if !state.selector.select(app) {
        return UpdateResult::none();
    }
    info!("Active app: {}", app);

    state.form.cancel_edit();
    state.form.clamp_selection(app);
    state.form.save_enabled = false;
    state.form.check_for_changes(app);

    if state.view != View::Logs {
        return UpdateResult::action(UpdateAction::LoadSettings { app });
    }

    state.logs.clear();
    let configured = state.is_active_configured();
    state.stream.status = StreamStatus::from_configured(configured);

    let stream_action = match state.stream.open(app, configured) {
        Some(generation) => UpdateAction::OpenStream { app, generation },
        None => UpdateAction::CloseStream,
    };
    UpdateResult::action_then(stream_action, Message::ReloadSettings)
}

/// Replace the configured-apps set. A logs view that could not connect
/// before (nothing was known yet at startup) connects now.
pub fn handle_configured_apps_loaded(state: &mut AppState, apps: ConfiguredApps) -> UpdateResult {
    state.configured = apps;

    if state.view != View::Logs || state.stream.phase() != StreamPhase::Closed {
        return UpdateResult::none();
    }
    let app = state.active_app();
    let configured = state.is_active_configured();
    state.stream.status = StreamStatus::from_configured(configured);
    match state.stream.open(app, configured) {
        Some(generation) => UpdateResult::action(UpdateAction::OpenStream { app, generation }),
        None => UpdateResult::none(),
    }
}
