//! Settings form handlers: load, save, reset, connection test and editing

use hdash_client::{SaveSettingsRequest, TestConnectionRequest};
use hdash_core::prelude::*;
use hdash_core::{AppId, RequestError};

use crate::log_stream::{StreamPhase, StreamStatus};

use crate::dialog::Dialog;
use crate::message::Message;
use crate::settings_form::{ConnectionStatus, FieldKind, FormField, SettingsSnapshot};
use crate::state::{AppState, View};

use super::{UpdateAction, UpdateResult};

pub(crate) const SAVED_WITH_CHANGES: &str =
    "Settings saved successfully and cycle restarted to apply changes!";
pub(crate) const SAVED_WITHOUT_CHANGES: &str = "No changes detected.";
pub(crate) const RESET_CONFIRM: &str =
    "Are you sure you want to reset all settings to default values?";
pub(crate) const RESET_DONE: &str = "Settings reset to defaults and cycle restarted.";

// ─────────────────────────────────────────────────────────
// Load
// ─────────────────────────────────────────────────────────

pub fn handle_loaded(state: &mut AppState, app: AppId, snapshot: SettingsSnapshot) -> UpdateResult {
    debug!("Settings loaded for {}", app);
    state.form.apply_loaded(app, snapshot, &mut state.configured);
    if app == state.active_app() {
        state.form.check_for_changes(app);
    }
    refresh_log_status(state);
    UpdateResult::action(UpdateAction::RefreshConfiguredApps)
}

pub fn handle_load_failed(app: AppId, error: &RequestError) -> UpdateResult {
    warn!("Error loading settings for {}: {}", app, error);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Save
// ─────────────────────────────────────────────────────────

pub fn handle_save(state: &mut AppState) -> UpdateResult {
    let app = state.active_app();
    let Some(request) = state.form.build_save_request(app) else {
        return UpdateResult::none();
    };
    info!("Saving settings for {}", app);
    state.form.pending_save = Some(request.clone());
    UpdateResult::action(UpdateAction::SaveSettings { request })
}

pub fn handle_saved(
    state: &mut AppState,
    request: SaveSettingsRequest,
    changes_made: bool,
) -> UpdateResult {
    let active = state.active_app();
    state.form.pending_save = None;
    state.form.apply_saved(&request, &mut state.configured);
    state.form.check_for_changes(active);

    let message = if changes_made {
        SAVED_WITH_CHANGES
    } else {
        SAVED_WITHOUT_CHANGES
    };
    state.dialog = Some(Dialog::alert("Settings", message));
    refresh_log_status(state);
    UpdateResult::action(UpdateAction::RefreshConfiguredApps)
}

pub fn handle_save_failed(state: &mut AppState, app: AppId, error: &RequestError) -> UpdateResult {
    warn!("Saving settings for {} failed: {}", app, error);
    state.form.pending_save = None;
    state.dialog = Some(Dialog::alert(
        "Settings",
        format!("Error saving settings: {error}"),
    ));
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Reset
// ─────────────────────────────────────────────────────────

pub fn handle_request_reset(state: &mut AppState) -> UpdateResult {
    let app = state.active_app();
    state.dialog = Some(Dialog::confirm(
        "Reset Settings",
        RESET_CONFIRM,
        Message::ConfirmReset { app },
    ));
    UpdateResult::none()
}

pub fn handle_reset_completed(state: &mut AppState, app: AppId) -> UpdateResult {
    info!("Settings reset for {}", app);
    state.dialog = Some(Dialog::alert("Settings", RESET_DONE));
    UpdateResult::action_then(
        UpdateAction::LoadSettings {
            app: state.active_app(),
        },
        Message::RefreshConfiguredApps,
    )
}

pub fn handle_reset_failed(state: &mut AppState, app: AppId, error: &RequestError) -> UpdateResult {
    warn!("Resetting settings for {} failed: {}", app, error);
    state.dialog = Some(Dialog::alert(
        "Settings",
        format!("Error resetting settings: {error}"),
    ));
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Connection test
// ─────────────────────────────────────────────────────────

pub fn handle_test_connection(state: &mut AppState) -> UpdateResult {
    let app = state.active_app();
    let values = state.form.values(app);
    let api_url = values.text(FormField::ApiUrl);
    let api_key = values.text(FormField::ApiKey);

    if api_url.is_empty() || api_key.is_empty() {
        state.dialog = Some(Dialog::alert(
            "Test Connection",
            format!(
                "Please enter both API URL and API Key for {} before testing the connection.",
                app.display_name()
            ),
        ));
        return UpdateResult::none();
    }

    state.form.set_status(app, ConnectionStatus::Testing);
    UpdateResult::action(UpdateAction::TestConnection {
        request: TestConnectionRequest {
            app,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
        },
    })
}

pub fn handle_connection_tested(
    state: &mut AppState,
    app: AppId,
    result: std::result::Result<(), RequestError>,
) -> UpdateResult {
    match result {
        Ok(()) => {
            info!("Connection test for {} succeeded", app);
            state.form.set_status(app, ConnectionStatus::Connected);
            state.configured.set(app, true);
            return UpdateResult::action(UpdateAction::RefreshConfiguredApps);
        }
        Err(error @ RequestError::Application { .. }) => {
            state.form.set_status(app, ConnectionStatus::ConnectionFailed);
            state.configured.set(app, false);
            state.dialog = Some(Dialog::alert(
                "Test Connection",
                format!("Connection failed: {error}"),
            ));
        }
        Err(error @ RequestError::Network(_)) => {
            warn!("Error testing {} connection: {}", app, error);
            state.form.set_status(app, ConnectionStatus::ConnectionError);
            state.configured.set(app, false);
            state.dialog = Some(Dialog::alert(
                "Test Connection",
                format!("Error testing {app} connection: {error}"),
            ));
        }
    }
    UpdateResult::none()
}

/// Re-derive the log pane label from Configured-Apps while the logs view is
/// up and no connection outcome has been reported yet.
fn refresh_log_status(state: &mut AppState) {
    if state.view != View::Logs {
        return;
    }
    if matches!(
        state.stream.phase(),
        StreamPhase::Closed | StreamPhase::Connecting
    ) {
        state.stream.status = StreamStatus::from_configured(state.is_active_configured());
    }
}

// ─────────────────────────────────────────────────────────
// Editing
// ─────────────────────────────────────────────────────────

/// Enter/Space on the selected field. With `toggle_only`, text fields are
/// left alone.
pub fn handle_field_activate(state: &mut AppState, toggle_only: bool) -> UpdateResult {
    let app = state.active_app();
    let Some(field) = state.form.selected_field(app) else {
        return UpdateResult::none();
    };
    if toggle_only && field.kind() != FieldKind::Toggle {
        return UpdateResult::none();
    }
    if state.form.activate(app) {
        state.form.check_for_changes(app);
    }
    UpdateResult::none()
}

pub fn handle_edit_commit(state: &mut AppState) -> UpdateResult {
    let app = state.active_app();
    if state.form.commit_edit(app) {
        state.form.check_for_changes(app);
    }
    UpdateResult::none()
}
