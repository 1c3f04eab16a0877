//! Message types for the application (TEA pattern)

use hdash_client::SaveSettingsRequest;
use hdash_core::{AppId, ConfiguredApps, RequestError};

use crate::input_key::InputKey;
use crate::settings_form::SettingsSnapshot;
use crate::state::View;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Enter a view, running its entry effects
    SwitchView(View),
    /// Tab / Shift+Tab through the views
    NextView,
    PreviousView,

    /// Tab selection of an app
    SelectApp(AppId),
    NextApp,
    PreviousApp,

    /// Open `{base_url}/user` in the system browser
    OpenUserPage,

    // ─────────────────────────────────────────────────────────
    // Settings Form
    // ─────────────────────────────────────────────────────────
    /// Reload settings for the active app
    ReloadSettings,
    SettingsLoaded {
        app: AppId,
        snapshot: SettingsSnapshot,
    },
    SettingsLoadFailed {
        app: AppId,
        error: RequestError,
    },

    SaveSettings,
    SettingsSaved {
        request: SaveSettingsRequest,
        changes_made: bool,
    },
    SettingsSaveFailed {
        app: AppId,
        error: RequestError,
    },

    /// Ask for confirmation before resetting
    RequestReset,
    /// Confirmed; submit the reset for `app`
    ConfirmReset {
        app: AppId,
    },
    ResetCompleted {
        app: AppId,
    },
    ResetFailed {
        app: AppId,
        error: RequestError,
    },

    TestConnection,
    ConnectionTested {
        app: AppId,
        result: Result<(), RequestError>,
    },

    FieldNext,
    FieldPrevious,
    /// Enter on a field: edit text or flip a toggle
    FieldActivate,
    /// Space on a field: flip a toggle only
    FieldToggle,
    EditInput(char),
    EditBackspace,
    EditCommit,
    EditCancel,

    // ─────────────────────────────────────────────────────────
    // Log Stream
    // ─────────────────────────────────────────────────────────
    StreamOpened {
        generation: u64,
    },
    StreamLine {
        generation: u64,
        line: String,
    },
    StreamFailed {
        generation: u64,
        error: String,
    },
    /// Retry delay elapsed for the connection attempt `generation`
    ReconnectDue {
        generation: u64,
    },

    ToggleAutoScroll,
    ClearLogs,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Home / Theme
    // ─────────────────────────────────────────────────────────
    RefreshConfiguredApps,
    ConfiguredAppsLoaded(ConfiguredApps),

    LoadTheme,
    ThemeLoaded(bool),
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Dialog
    // ─────────────────────────────────────────────────────────
    DialogConfirm,
    DialogDismiss,
}
