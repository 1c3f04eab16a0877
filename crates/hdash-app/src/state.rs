//! Application state (Model in TEA pattern)

use std::fmt;
use std::str::FromStr;

use hdash_core::{AppId, ConfiguredApps, Error};

use crate::config::Settings;
use crate::dialog::Dialog;
use crate::log_stream::LogStreamState;
use crate::log_view_state::LogPane;
use crate::selector::AppSelector;
use crate::settings_form::SettingsForm;

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Logs,
    Settings,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Logs, View::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Logs => "Logs",
            View::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            View::Home => 0,
            View::Logs => 1,
            View::Settings => 2,
        }
    }

    pub fn next(&self) -> View {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> View {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(View::Home),
            "logs" => Ok(View::Logs),
            "settings" => Ok(View::Settings),
            other => Err(Error::config(format!(
                "unknown view '{other}' (expected home, logs or settings)"
            ))),
        }
    }
}

/// Whether the loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Local config (`config.toml` plus CLI overrides)
    pub settings: Settings,

    pub view: View,

    /// Sole writer of the active app
    pub selector: AppSelector,

    /// Derived: which apps have URL and key
    pub configured: ConfiguredApps,

    pub form: SettingsForm,

    pub stream: LogStreamState,

    pub logs: LogPane,

    pub dark_mode: bool,

    /// At most one modal
    pub dialog: Option<Dialog>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let logs = LogPane::new(settings.logs.max_entries);
        Self {
            phase: AppPhase::Running,
            settings,
            view: View::Home,
            selector: AppSelector::default(),
            configured: ConfiguredApps::default(),
            form: SettingsForm::new(),
            stream: LogStreamState::new(),
            logs,
            dark_mode: false,
            dialog: None,
        }
    }

    pub fn active_app(&self) -> AppId {
        self.selector.active()
    }

    pub fn is_active_configured(&self) -> bool {
        self.configured.is_configured(self.active_app())
    }

    /// `{base_url}/user`
    pub fn user_page_url(&self) -> String {
        format!("{}/user", self.settings.server.base_url.trim_end_matches('/'))
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
