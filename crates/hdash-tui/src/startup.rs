//! Startup functions for the TUI runner
//!
//! Seeds the state from the command line and lists the messages that
//! bring the first screen up: theme, configured-apps, settings, then the
//! initial view.

use hdash_app::selector::AppSelector;
use hdash_app::state::{AppState, View};
use hdash_app::Message;
use hdash_core::AppId;

/// Initial screen requested on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartOptions {
    pub view: View,
    pub app: AppId,
}

/// Initialize startup state and return the messages to process before the
/// first draw.
pub fn startup(state: &mut AppState, options: &StartOptions) -> Vec<Message> {
    state.selector = AppSelector::new(options.app);

    let mut messages = vec![Message::LoadTheme];
    // Entering Home refreshes the configured apps itself
    if options.view != View::Home {
        messages.push(Message::RefreshConfiguredApps);
    }
    messages.push(Message::ReloadSettings);
    messages.push(Message::SwitchView(options.view));
    messages
}
