//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys, logs, navigation, settings, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message and an optional action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SwitchView(view) => navigation::handle_switch_view(state, view),
        Message::NextView => UpdateResult::message(Message::SwitchView(state.view.next())),
        Message::PreviousView => UpdateResult::message(Message::SwitchView(state.view.previous())),

        Message::SelectApp(app) => navigation::handle_select_app(state, app),
        Message::NextApp => UpdateResult::message(Message::SelectApp(state.active_app().next())),
        Message::PreviousApp => {
            UpdateResult::message(Message::SelectApp(state.active_app().previous()))
        }

        Message::OpenUserPage => UpdateResult::action(UpdateAction::OpenInBrowser {
            url: state.user_page_url(),
        }),

        // ─────────────────────────────────────────────────────────
        // Settings Form
        // ─────────────────────────────────────────────────────────
        Message::ReloadSettings => UpdateResult::action(UpdateAction::LoadSettings {
            app: state.active_app(),
        }),
        Message::SettingsLoaded { app, snapshot } => settings::handle_loaded(state, app, snapshot),
        Message::SettingsLoadFailed { app, error } => settings::handle_load_failed(app, &error),

        Message::SaveSettings => settings::handle_save(state),
        Message::SettingsSaved {
            request,
            changes_made,
        } => settings::handle_saved(state, request, changes_made),
        Message::SettingsSaveFailed { app, error } => {
            settings::handle_save_failed(state, app, &error)
        }

        Message::RequestReset => settings::handle_request_reset(state),
        Message::ConfirmReset { app } => {
            UpdateResult::action(UpdateAction::ResetSettings { app })
        }
        Message::ResetCompleted { app } => settings::handle_reset_completed(state, app),
        Message::ResetFailed { app, error } => settings::handle_reset_failed(state, app, &error),

        Message::TestConnection => settings::handle_test_connection(state),
        Message::ConnectionTested { app, result } => {
            settings::handle_connection_tested(state, app, result)
        }

        Message::FieldNext => {
            let app = state.active_app();
            state.form.select_next(app);
            UpdateResult::none()
        }
        Message::FieldPrevious => {
            let app = state.active_app();
            state.form.select_previous(app);
            UpdateResult::none()
        }
        Message::FieldActivate => settings::handle_field_activate(state, false),
        Message::FieldToggle => settings::handle_field_activate(state, true),
        Message::EditInput(c) => {
            if let Some(edit) = state.form.editing.as_mut() {
                edit.buffer.push(c);
            }
            UpdateResult::none()
        }
        Message::EditBackspace => {
            if let Some(edit) = state.form.editing.as_mut() {
                edit.buffer.pop();
            }
            UpdateResult::none()
        }
        Message::EditCommit => settings::handle_edit_commit(state),
        Message::EditCancel => {
            state.form.cancel_edit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Log Stream
        // ─────────────────────────────────────────────────────────
        Message::StreamOpened { generation } => logs::handle_stream_opened(state, generation),
        Message::StreamLine { generation, line } => {
            logs::handle_stream_line(state, generation, line)
        }
        Message::StreamFailed { generation, error } => {
            logs::handle_stream_failed(state, generation, &error)
        }
        Message::ReconnectDue { generation } => logs::handle_reconnect_due(state, generation),

        Message::ToggleAutoScroll => {
            state.logs.view.toggle_auto_scroll();
            UpdateResult::none()
        }
        Message::ClearLogs => {
            state.logs.clear();
            UpdateResult::none()
        }
        Message::ScrollUp => {
            state.logs.view.scroll_up(1);
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.logs.view.scroll_down(1);
            UpdateResult::none()
        }
        Message::PageUp => {
            state.logs.view.page_up();
            UpdateResult::none()
        }
        Message::PageDown => {
            state.logs.view.page_down();
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            state.logs.view.scroll_to_top();
            UpdateResult::none()
        }
        Message::ScrollToBottom => {
            state.logs.view.scroll_to_bottom();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Home / Theme
        // ─────────────────────────────────────────────────────────
        Message::RefreshConfiguredApps => UpdateResult::action(UpdateAction::RefreshConfiguredApps),
        Message::ConfiguredAppsLoaded(apps) => navigation::handle_configured_apps_loaded(state, apps),

        Message::LoadTheme => UpdateResult::action(UpdateAction::LoadTheme),
        Message::ThemeLoaded(dark_mode) => {
            state.dark_mode = dark_mode;
            UpdateResult::none()
        }
        Message::ToggleTheme => {
            state.dark_mode = !state.dark_mode;
            UpdateResult::action(UpdateAction::SaveTheme {
                dark_mode: state.dark_mode,
            })
        }

        // ─────────────────────────────────────────────────────────
        // Dialog
        // ─────────────────────────────────────────────────────────
        Message::DialogConfirm => match state.dialog.take() {
            Some(crate::dialog::Dialog::Confirm { on_confirm, .. }) => {
                UpdateResult::message(*on_confirm)
            }
            _ => UpdateResult::none(),
        },
        Message::DialogDismiss => {
            state.dialog = None;
            UpdateResult::none()
        }
    }
}
