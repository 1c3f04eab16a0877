//! # hdash-client - Huntarr Backend Client
//!
//! HTTP/JSON access to the Huntarr REST API and the server-sent-events log
//! stream.
//!
//! Depends on [`hdash_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### API Client
//! - [`ApiClient`] - Async trait the application layer talks through
//! - [`HttpApiClient`] - reqwest-backed implementation
//! - [`LogStreamEvent`] - Events forwarded by [`ApiClient::stream_logs`]
//!
//! ### Wire Types (`protocol`)
//! - [`GlobalSettingsResponse`], [`AppSettingsResponse`] - Settings reads
//! - [`SaveSettingsRequest`], [`CoreSettings`], [`AdvancedSettings`] - Settings writes
//! - [`TestConnectionRequest`] - Connection check
//!
//! ### Event Stream (`sse`)
//! - [`SseDecoder`] - Incremental `text/event-stream` frame decoder

pub mod api;
pub mod protocol;
pub mod sse;

pub use api::{ApiClient, HttpApiClient, LocalApiClient, LogStreamEvent};
pub use protocol::{
    AdvancedSettings, AdvancedSettingsWire, AppSettingsResponse, CoreSettings, CoreSettingsWire,
    GlobalSettingsResponse, SaveSettingsRequest, SaveSettingsResponse, StatusResponse,
    TestConnectionRequest,
};
pub use sse::{SseDecoder, SseEvent};
