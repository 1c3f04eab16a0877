//! Log stream event handlers

use hdash_core::prelude::*;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_stream_opened(state: &mut AppState, generation: u64) -> UpdateResult {
    if state.stream.on_opened(generation) {
        info!("Log stream connected (generation {})", generation);
    }
    UpdateResult::none()
}

pub fn handle_stream_line(state: &mut AppState, generation: u64, line: String) -> UpdateResult {
    if state.stream.accepts_line(generation) {
        state.logs.push(line);
    } else {
        trace!("Dropping line from stale stream {}", generation);
    }
    UpdateResult::none()
}

pub fn handle_stream_failed(state: &mut AppState, generation: u64, error: &str) -> UpdateResult {
    match state.stream.on_error(generation) {
        Some(app) => {
            let delay = state.settings.logs.reconnect_delay();
            warn!(
                "Log stream for {} failed: {}; retrying in {:?}",
                app, error, delay
            );
            UpdateResult::action(UpdateAction::ScheduleReconnect { generation, delay })
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_reconnect_due(state: &mut AppState, generation: u64) -> UpdateResult {
    let active = state.active_app();
    let configured = state.is_active_configured();
    match state.stream.on_retry_due(generation, active, configured) {
        Some(next) => {
            debug!("Reconnecting log stream for {}", active);
            UpdateResult::action(UpdateAction::OpenStream {
                app: active,
                generation: next,
            })
        }
        None => UpdateResult::none(),
    }
}
