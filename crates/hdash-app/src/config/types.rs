//! Configuration types for huntarr-dash
//!
//! `Settings` mirrors `config.toml` section by section. Every field has a
//! default so a partial file still loads.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Global application settings from `config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub logs: LogSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the Huntarr backend lives
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL of the web backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout for REST calls (the log stream is exempt)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

fn default_base_url() -> String {
    "http://localhost:9705".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Log pane behaviour
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogSettings {
    /// Oldest entries are dropped past this count
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Delay before reopening a failed stream
    #[serde(default = "default_reconnect_delay_secs")]
    pub reconnect_delay_secs: u64,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            reconnect_delay_secs: default_reconnect_delay_secs(),
        }
    }
}

impl LogSettings {
    /// Reconnect delay, never shorter than one second.
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_secs(self.reconnect_delay_secs.max(1))
    }
}

fn default_max_entries() -> usize {
    10_000
}

fn default_reconnect_delay_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_timestamps: true,
        }
    }
}

fn default_true() -> bool {
    true
}
