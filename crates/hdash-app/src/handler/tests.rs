//! Tests for handler module

use std::time::Duration;

use hdash_client::GlobalSettingsResponse;
use hdash_core::{AppId, RequestError};

use super::settings::{RESET_DONE, SAVED_WITHOUT_CHANGES, SAVED_WITH_CHANGES};
use super::*;
use crate::dialog::Dialog;
use crate::input_key::InputKey;
use crate::log_stream::{StreamPhase, StreamStatus};
use crate::message::Message;
use crate::settings_form::{ConnectionStatus, FormField, SettingsSnapshot};
use crate::state::{AppPhase, AppState, View};

/// Run `msg` and every follow-up message, collecting the actions.
fn run(state: &mut AppState, msg: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(msg);
    while let Some(msg) = next {
        let result = update(state, msg);
        if let Some(action) = result.action {
            actions.push(action);
        }
        next = result.message;
    }
    actions
}

fn primary_snapshot(url: &str, key: &str) -> SettingsSnapshot {
    SettingsSnapshot::from_global(&GlobalSettingsResponse {
        api_url: Some(url.to_string()),
        api_key: Some(key.to_string()),
        ..Default::default()
    })
}

/// State with sonarr loaded and configured.
fn loaded_state() -> AppState {
    let mut state = AppState::new();
    run(
        &mut state,
        Message::SettingsLoaded {
            app: AppId::Sonarr,
            snapshot: primary_snapshot("http://sonarr:8989", "abc"),
        },
    );
    state
}

fn alert_message(state: &AppState) -> Option<&str> {
    match &state.dialog {
        Some(dialog @ Dialog::Alert { .. }) => Some(dialog.message()),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_home_view_refreshes_configured_apps() {
    let mut state = AppState::new();
    state.view = View::Settings;

    let actions = run(&mut state, Message::SwitchView(View::Home));

    assert_eq!(state.view, View::Home);
    assert_eq!(actions, vec![UpdateAction::RefreshConfiguredApps]);
}

#[test]
fn test_settings_view_loads_active_app() {
    let mut state = AppState::new();

    let actions = run(&mut state, Message::SwitchView(View::Settings));

    assert_eq!(
        actions,
        vec![UpdateAction::LoadSettings {
            app: AppId::Sonarr
        }]
    );
}

#[test]
fn test_next_view_wraps() {
    let mut state = AppState::new();
    state.view = View::Settings;

    run(&mut state, Message::NextView);

    assert_eq!(state.view, View::Home);
}

// ─────────────────────────────────────────────────────────
// App selection and log stream
// ─────────────────────────────────────────────────────────

#[test]
fn test_entering_logs_opens_stream_for_configured_app() {
    let mut state = loaded_state();

    let actions = run(&mut state, Message::SwitchView(View::Logs));

    assert_eq!(
        actions,
        vec![UpdateAction::OpenStream {
            app: AppId::Sonarr,
            generation: 1
        }]
    );
    assert_eq!(state.stream.phase(), StreamPhase::Connecting);
    assert_eq!(state.stream.status, StreamStatus::Connected);
}

#[test]
fn test_entering_logs_with_unconfigured_app_stays_closed() {
    let mut state = AppState::new();

    let actions = run(&mut state, Message::SwitchView(View::Logs));

    assert!(actions.is_empty());
    assert_eq!(state.stream.phase(), StreamPhase::Closed);
    assert_eq!(state.stream.status, StreamStatus::Disconnected);
}

#[test]
fn test_configured_apps_arriving_in_logs_opens_stream() {
    let mut state = AppState::new();
    run(&mut state, Message::SwitchView(View::Logs));
    assert_eq!(state.stream.phase(), StreamPhase::Closed);

    let apps = hdash_core::ConfiguredApps {
        sonarr: true,
        ..Default::default()
    };
    let actions = run(&mut state, Message::ConfiguredAppsLoaded(apps));

    assert_eq!(
        actions,
        vec![UpdateAction::OpenStream {
            app: AppId::Sonarr,
            generation: 2
        }]
    );
    assert_eq!(state.stream.status, StreamStatus::Connected);
}

#[test]
fn test_configured_apps_on_home_only_updates_set() {
    let mut state = AppState::new();
    let apps = hdash_core::ConfiguredApps {
        radarr: true,
        ..Default::default()
    };

    let actions = run(&mut state, Message::ConfiguredAppsLoaded(apps));

    assert!(actions.is_empty());
    assert!(state.configured.is_configured(AppId::Radarr));
}

#[test]
fn test_selecting_same_app_is_noop() {
    let mut state = loaded_state();
    state.view = View::Logs;

    let actions = run(&mut state, Message::SelectApp(AppId::Sonarr));

    assert!(actions.is_empty());
}

#[test]
fn test_switch_to_unconfigured_app_in_logs_closes_stream() {
    let mut state = loaded_state();
    run(&mut state, Message::SwitchView(View::Logs));
    run(&mut state, Message::StreamOpened { generation: 1 });
    run(
        &mut state,
        Message::StreamLine {
            generation: 1,
            line: "2024 - INFO - hunting".into(),
        },
    );
    assert_eq!(state.logs.len(), 1);

    let actions = run(&mut state, Message::SelectApp(AppId::Radarr));

    assert_eq!(
        actions,
        vec![
            UpdateAction::CloseStream,
            UpdateAction::LoadSettings {
                app: AppId::Radarr
            },
        ]
    );
    assert_eq!(state.active_app(), AppId::Radarr);
    assert_eq!(state.stream.phase(), StreamPhase::Closed);
    assert_ne!(state.stream.phase(), StreamPhase::Connecting);
    assert_eq!(state.stream.status, StreamStatus::Disconnected);
    assert!(state.logs.is_empty());
}

#[test]
fn test_switch_to_configured_app_in_logs_replaces_stream() {
    let mut state = loaded_state();
    state.configured.set(AppId::Lidarr, true);
    run(&mut state, Message::SwitchView(View::Logs));

    let actions = run(&mut state, Message::SelectApp(AppId::Lidarr));

    assert_eq!(
        actions[0],
        UpdateAction::OpenStream {
            app: AppId::Lidarr,
            generation: 2
        }
    );
    assert_eq!(state.stream.app(), Some(AppId::Lidarr));
}

#[test]
fn test_switch_app_outside_logs_only_reloads() {
    let mut state = loaded_state();
    state.view = View::Settings;
    state.form.selected = 10;

    let actions = run(&mut state, Message::NextApp);

    assert_eq!(state.active_app(), AppId::Radarr);
    assert_eq!(
        actions,
        vec![UpdateAction::LoadSettings {
            app: AppId::Radarr
        }]
    );
    // Radarr's panel only has the connection fields
    assert_eq!(state.form.selected, 1);
    assert!(!state.form.save_enabled);
}

#[test]
fn test_stale_stream_lines_are_dropped() {
    let mut state = loaded_state();
    run(&mut state, Message::SwitchView(View::Logs));
    run(&mut state, Message::StreamOpened { generation: 1 });
    // Re-entering replaces the stream
    run(&mut state, Message::SwitchView(View::Logs));

    run(
        &mut state,
        Message::StreamLine {
            generation: 1,
            line: "old".into(),
        },
    );

    assert!(state.logs.is_empty());
}

#[test]
fn test_stream_failure_schedules_reconnect() {
    let mut state = loaded_state();
    run(&mut state, Message::SwitchView(View::Logs));
    run(&mut state, Message::StreamOpened { generation: 1 });

    let actions = run(
        &mut state,
        Message::StreamFailed {
            generation: 1,
            error: "connection reset".into(),
        },
    );

    assert_eq!(
        actions,
        vec![UpdateAction::ScheduleReconnect {
            generation: 1,
            delay: Duration::from_secs(5)
        }]
    );
    assert_eq!(state.stream.phase(), StreamPhase::Reconnecting);
    assert_eq!(state.stream.status, StreamStatus::Disconnected);

    let actions = run(&mut state, Message::ReconnectDue { generation: 1 });

    assert_eq!(
        actions,
        vec![UpdateAction::OpenStream {
            app: AppId::Sonarr,
            generation: 2
        }]
    );
}

#[test]
fn test_reconnect_skipped_after_app_switch() {
    let mut state = loaded_state();
    state.configured.set(AppId::Radarr, true);
    run(&mut state, Message::SwitchView(View::Logs));
    run(
        &mut state,
        Message::StreamFailed {
            generation: 1,
            error: "boom".into(),
        },
    );
    run(&mut state, Message::SelectApp(AppId::Radarr));

    let actions = run(&mut state, Message::ReconnectDue { generation: 1 });

    assert!(actions.is_empty());
    assert_eq!(state.stream.app(), Some(AppId::Radarr));
}

#[test]
fn test_reconnect_dropped_when_app_no_longer_configured() {
    let mut state = loaded_state();
    run(&mut state, Message::SwitchView(View::Logs));
    run(
        &mut state,
        Message::StreamFailed {
            generation: 1,
            error: "boom".into(),
        },
    );
    state.configured.set(AppId::Sonarr, false);

    let actions = run(&mut state, Message::ReconnectDue { generation: 1 });

    assert!(actions.is_empty());
    assert_eq!(state.stream.phase(), StreamPhase::Closed);
}

#[test]
fn test_stale_failure_is_ignored() {
    let mut state = loaded_state();
    run(&mut state, Message::SwitchView(View::Logs));
    run(&mut state, Message::SwitchView(View::Logs));

    let actions = run(
        &mut state,
        Message::StreamFailed {
            generation: 1,
            error: "late".into(),
        },
    );

    assert!(actions.is_empty());
    assert_eq!(state.stream.phase(), StreamPhase::Connecting);
}

// ─────────────────────────────────────────────────────────
// Log pane controls
// ─────────────────────────────────────────────────────────

#[test]
fn test_scroll_up_releases_and_toggle_restores_auto_scroll() {
    let mut state = loaded_state();
    state.logs.set_viewport_rows(5);
    run(&mut state, Message::SwitchView(View::Logs));
    run(&mut state, Message::StreamOpened { generation: 1 });
    for i in 0..20 {
        run(
            &mut state,
            Message::StreamLine {
                generation: 1,
                line: format!("line {i}"),
            },
        );
    }
    assert_eq!(state.logs.view.bottom_gap(), 0);

    run(&mut state, Message::ScrollUp);
    run(&mut state, Message::ScrollUp);
    assert!(!state.logs.view.auto_scroll);

    run(&mut state, Message::ScrollToBottom);
    assert!(!state.logs.view.auto_scroll);

    run(&mut state, Message::ScrollToTop);
    run(&mut state, Message::ToggleAutoScroll);
    assert!(state.logs.view.auto_scroll);
    assert_eq!(state.logs.view.bottom_gap(), 0);
}

#[test]
fn test_clear_logs_empties_pane() {
    let mut state = AppState::new();
    state.logs.push("x".into());

    run(&mut state, Message::ClearLogs);

    assert!(state.logs.is_empty());
}

// ─────────────────────────────────────────────────────────
// Settings form
// ─────────────────────────────────────────────────────────

#[test]
fn test_loaded_settings_populate_form_and_configured() {
    let state = loaded_state();

    assert!(state.configured.is_configured(AppId::Sonarr));
    assert_eq!(
        state.form.values(AppId::Sonarr).text(FormField::ApiUrl),
        "http://sonarr:8989"
    );
    assert_eq!(state.form.status(AppId::Sonarr), ConnectionStatus::Configured);
    assert!(!state.form.save_enabled);
}

#[test]
fn test_load_failure_leaves_form_untouched() {
    let mut state = loaded_state();

    run(
        &mut state,
        Message::SettingsLoadFailed {
            app: AppId::Sonarr,
            error: RequestError::Network("offline".into()),
        },
    );

    assert!(state.configured.is_configured(AppId::Sonarr));
    assert!(state.dialog.is_none());
}

#[test]
fn test_save_without_changes_does_nothing() {
    let mut state = loaded_state();
    state.view = View::Settings;

    let actions = run(&mut state, Message::SaveSettings);

    assert!(actions.is_empty());
    assert!(state.form.pending_save.is_none());
}

#[test]
fn test_edit_commit_enables_save() {
    let mut state = loaded_state();
    state.view = View::Settings;
    state.form.selected = 0;

    run(&mut state, Message::FieldActivate);
    assert!(state.form.editing.is_some());
    run(&mut state, Message::EditInput('/'));
    run(&mut state, Message::EditCommit);

    assert!(state.form.editing.is_none());
    assert_eq!(
        state.form.values(AppId::Sonarr).text(FormField::ApiUrl),
        "http://sonarr:8989/"
    );
    assert!(state.form.save_enabled);
}

#[test]
fn test_edit_cancel_discards_buffer() {
    let mut state = loaded_state();
    state.form.selected = 0;

    run(&mut state, Message::FieldActivate);
    run(&mut state, Message::EditBackspace);
    run(&mut state, Message::EditCancel);

    assert_eq!(
        state.form.values(AppId::Sonarr).text(FormField::ApiUrl),
        "http://sonarr:8989"
    );
    assert!(!state.form.save_enabled);
}

#[test]
fn test_space_flips_toggle_but_not_text() {
    let mut state = loaded_state();
    state.form.selected = 0;
    run(&mut state, Message::FieldToggle);
    assert!(state.form.editing.is_none());

    state.form.selected = 6;
    let before = state.form.values(AppId::Sonarr).toggle(FormField::MonitoredOnly);
    run(&mut state, Message::FieldToggle);

    assert_ne!(
        state.form.values(AppId::Sonarr).toggle(FormField::MonitoredOnly),
        before
    );
    assert!(state.form.save_enabled);
}

#[test]
fn test_successful_save_becomes_new_baseline() {
    let mut state = loaded_state();
    state
        .form
        .values_mut(AppId::Sonarr)
        .set_text(FormField::SleepDuration, "0");
    state.form.check_for_changes(AppId::Sonarr);

    let actions = run(&mut state, Message::SaveSettings);
    let Some(UpdateAction::SaveSettings { request }) = actions.first().cloned() else {
        panic!("expected a save action, got {actions:?}");
    };
    assert_eq!(request.huntarr.map(|c| c.sleep_duration), Some(900));

    run(
        &mut state,
        Message::SettingsSaved {
            request,
            changes_made: true,
        },
    );

    assert_eq!(alert_message(&state), Some(SAVED_WITH_CHANGES));
    assert!(state.form.pending_save.is_none());
    assert!(!state.form.save_enabled);
    assert_eq!(
        state.form.values(AppId::Sonarr).text(FormField::SleepDuration),
        "900"
    );
}

#[test]
fn test_save_without_server_changes_reports_so() {
    let mut state = loaded_state();
    state
        .form
        .values_mut(AppId::Sonarr)
        .set_text(FormField::ApiKey, "xyz");
    let actions = run(&mut state, Message::SaveSettings);
    let Some(UpdateAction::SaveSettings { request }) = actions.first().cloned() else {
        panic!("expected a save action");
    };

    run(
        &mut state,
        Message::SettingsSaved {
            request,
            changes_made: false,
        },
    );

    assert_eq!(alert_message(&state), Some(SAVED_WITHOUT_CHANGES));
}

#[test]
fn test_failed_save_keeps_snapshot_and_configured() {
    let mut state = loaded_state();
    state
        .form
        .values_mut(AppId::Sonarr)
        .set_text(FormField::ApiKey, "");
    let before = state.form.snapshot(AppId::Sonarr).cloned();
    run(&mut state, Message::SaveSettings);

    run(
        &mut state,
        Message::SettingsSaveFailed {
            app: AppId::Sonarr,
            error: RequestError::Application {
                message: Some("Disk full".into()),
            },
        },
    );

    assert_eq!(state.form.snapshot(AppId::Sonarr).cloned(), before);
    assert!(state.configured.is_configured(AppId::Sonarr));
    assert!(state.form.save_enabled);
    assert_eq!(
        alert_message(&state),
        Some("Error saving settings: Disk full")
    );
}

#[test]
fn test_reset_requires_confirmation() {
    let mut state = loaded_state();

    let actions = run(&mut state, Message::RequestReset);
    assert!(actions.is_empty());
    assert!(state.dialog.as_ref().is_some_and(Dialog::is_confirm));

    let actions = run(&mut state, Message::DialogConfirm);
    assert_eq!(
        actions,
        vec![UpdateAction::ResetSettings {
            app: AppId::Sonarr
        }]
    );
    assert!(state.dialog.is_none());
}

#[test]
fn test_reset_dismissed_sends_nothing() {
    let mut state = loaded_state();
    run(&mut state, Message::RequestReset);

    let actions = run(&mut state, Message::DialogDismiss);

    assert!(actions.is_empty());
    assert!(state.dialog.is_none());
}

#[test]
fn test_reset_completed_reloads() {
    let mut state = loaded_state();

    let actions = run(&mut state, Message::ResetCompleted { app: AppId::Sonarr });

    assert_eq!(
        actions,
        vec![
            UpdateAction::LoadSettings {
                app: AppId::Sonarr
            },
            UpdateAction::RefreshConfiguredApps,
        ]
    );
    assert_eq!(alert_message(&state), Some(RESET_DONE));
}

#[test]
fn test_failed_reset_keeps_state() {
    let mut state = loaded_state();
    let before = state.form.snapshot(AppId::Sonarr).cloned();

    let actions = run(
        &mut state,
        Message::ResetFailed {
            app: AppId::Sonarr,
            error: RequestError::Network("timed out".into()),
        },
    );

    assert!(actions.is_empty());
    assert_eq!(state.form.snapshot(AppId::Sonarr).cloned(), before);
    assert!(state.configured.is_configured(AppId::Sonarr));
    assert_eq!(
        alert_message(&state),
        Some("Error resetting settings: timed out")
    );
}

#[test]
fn test_connection_test_requires_url_and_key() {
    let mut state = AppState::new();
    state.selector.select(AppId::Readarr);

    let actions = run(&mut state, Message::TestConnection);

    assert!(actions.is_empty());
    assert_eq!(
        alert_message(&state),
        Some("Please enter both API URL and API Key for Readarr before testing the connection.")
    );
}

#[test]
fn test_connection_test_success_marks_configured() {
    let mut state = AppState::new();
    let values = state.form.values_mut(AppId::Sonarr);
    values.set_text(FormField::ApiUrl, "http://sonarr:8989");
    values.set_text(FormField::ApiKey, "abc");

    let actions = run(&mut state, Message::TestConnection);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::TestConnection { request }] if request.api_key == "abc"
    ));
    assert_eq!(state.form.status(AppId::Sonarr), ConnectionStatus::Testing);

    run(
        &mut state,
        Message::ConnectionTested {
            app: AppId::Sonarr,
            result: Ok(()),
        },
    );

    assert_eq!(state.form.status(AppId::Sonarr), ConnectionStatus::Connected);
    assert!(state.configured.is_configured(AppId::Sonarr));
}

#[test]
fn test_connection_test_rejected_unconfigures() {
    let mut state = loaded_state();

    run(
        &mut state,
        Message::ConnectionTested {
            app: AppId::Sonarr,
            result: Err(RequestError::Application {
                message: Some("Invalid API key".into()),
            }),
        },
    );

    assert_eq!(
        state.form.status(AppId::Sonarr),
        ConnectionStatus::ConnectionFailed
    );
    assert!(!state.configured.is_configured(AppId::Sonarr));
    assert_eq!(
        alert_message(&state),
        Some("Connection failed: Invalid API key")
    );
}

#[test]
fn test_connection_test_network_error() {
    let mut state = loaded_state();

    run(
        &mut state,
        Message::ConnectionTested {
            app: AppId::Sonarr,
            result: Err(RequestError::Network("refused".into())),
        },
    );

    assert_eq!(
        state.form.status(AppId::Sonarr),
        ConnectionStatus::ConnectionError
    );
    assert_eq!(
        alert_message(&state),
        Some("Error testing sonarr connection: refused")
    );
}

// ─────────────────────────────────────────────────────────
// Follow-up refreshes after settings traffic
// ─────────────────────────────────────────────────────────

#[test]
fn test_settings_load_refreshes_configured_apps() {
    let mut state = AppState::new();

    let actions = run(
        &mut state,
        Message::SettingsLoaded {
            app: AppId::Sonarr,
            snapshot: primary_snapshot("http://sonarr:8989", "abc"),
        },
    );

    assert_eq!(actions, vec![UpdateAction::RefreshConfiguredApps]);
}

#[test]
fn test_successful_save_refreshes_configured_apps() {
    let mut state = loaded_state();
    state
        .form
        .values_mut(AppId::Sonarr)
        .set_text(FormField::ApiKey, "xyz");
    let actions = run(&mut state, Message::SaveSettings);
    let Some(UpdateAction::SaveSettings { request }) = actions.first().cloned() else {
        panic!("expected a save action");
    };

    let actions = run(
        &mut state,
        Message::SettingsSaved {
            request,
            changes_made: true,
        },
    );

    assert_eq!(actions, vec![UpdateAction::RefreshConfiguredApps]);
}

#[test]
fn test_connection_success_refreshes_configured_apps() {
    let mut state = loaded_state();

    let actions = run(
        &mut state,
        Message::ConnectionTested {
            app: AppId::Sonarr,
            result: Ok(()),
        },
    );

    assert_eq!(actions, vec![UpdateAction::RefreshConfiguredApps]);
}

#[test]
fn test_connection_failure_does_not_refresh() {
    let mut state = loaded_state();

    let actions = run(
        &mut state,
        Message::ConnectionTested {
            app: AppId::Sonarr,
            result: Err(RequestError::Network("refused".into())),
        },
    );

    assert!(actions.is_empty());
}

#[test]
fn test_load_in_logs_view_updates_stream_label() {
    let mut state = AppState::new();
    run(&mut state, Message::SwitchView(View::Logs));
    assert_eq!(state.stream.status, StreamStatus::Disconnected);

    run(
        &mut state,
        Message::SettingsLoaded {
            app: AppId::Sonarr,
            snapshot: primary_snapshot("http://sonarr:8989", "abc"),
        },
    );

    assert_eq!(state.stream.status, StreamStatus::Connected);
}

#[test]
fn test_load_outside_logs_view_leaves_stream_label() {
    let mut state = AppState::new();
    state.view = View::Settings;

    run(
        &mut state,
        Message::SettingsLoaded {
            app: AppId::Sonarr,
            snapshot: primary_snapshot("http://sonarr:8989", "abc"),
        },
    );

    assert_eq!(state.stream.status, StreamStatus::Disconnected);
}

#[test]
fn test_load_while_reconnecting_keeps_disconnected_label() {
    let mut state = loaded_state();
    run(&mut state, Message::SwitchView(View::Logs));
    run(
        &mut state,
        Message::StreamFailed {
            generation: 1,
            error: "connection reset".into(),
        },
    );
    assert_eq!(state.stream.phase(), StreamPhase::Reconnecting);

    run(
        &mut state,
        Message::SettingsLoaded {
            app: AppId::Sonarr,
            snapshot: primary_snapshot("http://sonarr:8989", "abc"),
        },
    );

    assert_eq!(state.stream.status, StreamStatus::Disconnected);
}

// ─────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_theme_saves_new_value() {
    let mut state = AppState::new();

    let actions = run(&mut state, Message::ToggleTheme);

    assert!(state.dark_mode);
    assert_eq!(actions, vec![UpdateAction::SaveTheme { dark_mode: true }]);
}

#[test]
fn test_open_user_page_uses_base_url() {
    let mut state = AppState::new();
    state.settings.server.base_url = "http://nas:9705".into();

    let actions = run(&mut state, Message::OpenUserPage);

    assert_eq!(
        actions,
        vec![UpdateAction::OpenInBrowser {
            url: "http://nas:9705/user".into()
        }]
    );
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_q_key_quits() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_ctrl_c_quits_even_with_dialog() {
    let mut state = AppState::new();
    state.dialog = Some(Dialog::alert("t", "m"));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_s_key_depends_on_view() {
    let mut state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('s')),
        Some(Message::SwitchView(View::Settings))
    ));

    state.view = View::Settings;
    assert!(matches!(
        handle_key(&state, InputKey::Char('s')),
        Some(Message::SaveSettings)
    ));
}

#[test]
fn test_number_keys_select_apps() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('3')),
        Some(Message::SelectApp(AppId::Lidarr))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('4')),
        Some(Message::SelectApp(AppId::Readarr))
    ));
    assert!(handle_key(&state, InputKey::Char('5')).is_none());
}

#[test]
fn test_logs_keys_only_in_logs_view() {
    let mut state = AppState::new();
    assert!(handle_key(&state, InputKey::Char('a')).is_none());

    state.view = View::Logs;
    assert!(matches!(
        handle_key(&state, InputKey::Char('a')),
        Some(Message::ToggleAutoScroll)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::End),
        Some(Message::ScrollToBottom)
    ));
}

#[test]
fn test_confirm_dialog_keys() {
    let mut state = AppState::new();
    state.dialog = Some(Dialog::confirm("t", "m", Message::ConfirmReset { app: AppId::Sonarr }));

    assert!(matches!(
        handle_key(&state, InputKey::Char('y')),
        Some(Message::DialogConfirm)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::DialogDismiss)
    ));
    // Dialog swallows global keys
    assert!(handle_key(&state, InputKey::Char('q')).is_none());
}

#[test]
fn test_editing_captures_characters() {
    let mut state = loaded_state();
    state.view = View::Settings;
    state.form.selected = 0;
    run(&mut state, Message::FieldActivate);

    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::EditInput('q'))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::EditCommit)
    ));
}
