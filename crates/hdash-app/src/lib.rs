//! hdash-app - Application state and orchestration for huntarr-dash
//!
//! This crate implements the TEA (The Elm Architecture) pattern: [`AppState`]
//! is the model, [`Message`] the input, [`handler::update`] the transition
//! function and [`actions::handle_action`] the effect runner that talks to
//! the backend through [`hdash_client::ApiClient`].
//!
//! The three controllers live in their own modules:
//! - [`settings_form`] - per-app settings panel, dirty check and save payload
//! - [`log_stream`] / [`log_view_state`] - log stream lifecycle and log pane
//! - [`selector`] - the active app

pub mod actions;
pub mod config;
pub mod dialog;
pub mod handler;
pub mod input_key;
pub mod log_stream;
pub mod log_view_state;
pub mod message;
pub mod process;
pub mod selector;
pub mod settings_form;
pub mod signals;
pub mod state;

// Re-export primary types
pub use actions::StreamTasks;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppPhase, AppState, View};
