//! Core domain types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::Error;

// ─────────────────────────────────────────────────────────────────────────────
// AppId
// ─────────────────────────────────────────────────────────────────────────────

/// One of the managed media-automation backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    /// The primary app; its tunables live at the top level of the settings payload.
    #[default]
    Sonarr,
    Radarr,
    Lidarr,
    Readarr,
}

impl AppId {
    /// All apps in tab order.
    pub const ALL: [AppId; 4] = [AppId::Sonarr, AppId::Radarr, AppId::Lidarr, AppId::Readarr];

    /// Wire identifier (`sonarr`, `radarr`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            AppId::Sonarr => "sonarr",
            AppId::Radarr => "radarr",
            AppId::Lidarr => "lidarr",
            AppId::Readarr => "readarr",
        }
    }

    /// Capitalised name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            AppId::Sonarr => "Sonarr",
            AppId::Radarr => "Radarr",
            AppId::Lidarr => "Lidarr",
            AppId::Readarr => "Readarr",
        }
    }

    /// Whether this app's settings carry the full tunables/advanced blocks.
    pub fn is_primary(&self) -> bool {
        matches!(self, AppId::Sonarr)
    }

    /// Position in [`AppId::ALL`].
    pub fn index(&self) -> usize {
        match self {
            AppId::Sonarr => 0,
            AppId::Radarr => 1,
            AppId::Lidarr => 2,
            AppId::Readarr => 3,
        }
    }

    /// App at `index`, wrapping around.
    pub fn from_index(index: usize) -> AppId {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(&self) -> AppId {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(&self) -> AppId {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sonarr" => Ok(AppId::Sonarr),
            "radarr" => Ok(AppId::Radarr),
            "lidarr" => Ok(AppId::Lidarr),
            "readarr" => Ok(AppId::Readarr),
            _ => Err(Error::invalid_app(s)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ConfiguredApps
// ─────────────────────────────────────────────────────────────────────────────

/// Which apps have both an API URL and an API key.
///
/// Derived data: recomputed after every load, save, reset and connection
/// test, and replaced wholesale from `/api/configured-apps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfiguredApps {
    #[serde(default)]
    pub sonarr: bool,
    #[serde(default)]
    pub radarr: bool,
    #[serde(default)]
    pub lidarr: bool,
    #[serde(default)]
    pub readarr: bool,
}

impl ConfiguredApps {
    pub fn is_configured(&self, app: AppId) -> bool {
        match app {
            AppId::Sonarr => self.sonarr,
            AppId::Radarr => self.radarr,
            AppId::Lidarr => self.lidarr,
            AppId::Readarr => self.readarr,
        }
    }

    pub fn set(&mut self, app: AppId, configured: bool) {
        match app {
            AppId::Sonarr => self.sonarr = configured,
            AppId::Radarr => self.radarr = configured,
            AppId::Lidarr => self.lidarr = configured,
            AppId::Readarr => self.readarr = configured,
        }
    }
}

/// An app is configured when both its API URL and API key are non-empty.
pub fn is_configured(api_url: &str, api_key: &str) -> bool {
    !api_url.is_empty() && !api_key.is_empty()
}

// ─────────────────────────────────────────────────────────────────────────────
// Log entries
// ─────────────────────────────────────────────────────────────────────────────

/// Severity classification of a streamed log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Debug,
}

/// Markers checked in priority order; first match wins.
const LEVEL_MARKERS: [(&str, LogLevel); 4] = [
    (" - INFO - ", LogLevel::Info),
    (" - WARNING - ", LogLevel::Warning),
    (" - ERROR - ", LogLevel::Error),
    (" - DEBUG - ", LogLevel::Debug),
];

impl LogLevel {
    /// Classify a raw log line by substring match against the backend's
    /// `" - LEVEL - "` markers. Returns `None` when no marker is present.
    pub fn classify(line: &str) -> Option<LogLevel> {
        LEVEL_MARKERS
            .iter()
            .find(|(marker, _)| line.contains(marker))
            .map(|(_, level)| *level)
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// A single rendered line of the log pane.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Monotonic id within the pane
    pub id: u64,
    /// When the line arrived on the stream
    pub received_at: DateTime<Local>,
    /// `None` when the line carries no recognised marker
    pub level: Option<LogLevel>,
    /// The line exactly as received
    pub message: String,
}

impl LogEntry {
    pub fn new(id: u64, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            id,
            received_at: Local::now(),
            level: LogLevel::classify(&message),
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Some(LogLevel::Error)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
