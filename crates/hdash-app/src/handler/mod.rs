//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per view and mode
//! - `navigation`: View switching and app selection
//! - `settings`: Settings form load/save/reset/test handlers
//! - `logs`: Log stream events and log pane controls

pub(crate) mod keys;
pub(crate) mod logs;
pub(crate) mod navigation;
pub(crate) mod settings;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use hdash_client::{SaveSettingsRequest, TestConnectionRequest};
use hdash_core::AppId;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Fetch settings for `app` (plus its app-settings for non-primary apps)
    LoadSettings { app: AppId },

    /// Submit a save
    SaveSettings { request: SaveSettingsRequest },

    /// Submit a reset to defaults
    ResetSettings { app: AppId },

    /// Check an app's URL/key against the backend
    TestConnection { request: TestConnectionRequest },

    /// Replace the configured-apps set from the backend
    RefreshConfiguredApps,

    LoadTheme,
    SaveTheme { dark_mode: bool },

    /// Abort any running stream and retry timer, then connect for `app`.
    /// Every event the new task reports is tagged with `generation`.
    OpenStream { app: AppId, generation: u64 },

    /// Abort any running stream and retry timer
    CloseStream,

    /// Arm the retry timer for a failed connection
    ScheduleReconnect { generation: u64, delay: Duration },

    /// Open a URL in the system browser
    OpenInBrowser { url: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Perform `action`, then process `msg`
    pub fn action_then(action: UpdateAction, msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}
