//! # hdash-core - Core Domain Types
//!
//! Foundation crate for huntarr-dash. Provides domain types, error handling,
//! logging setup and the small pure helpers shared by every other crate.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AppId`] - One of sonarr/radarr/lidarr/readarr
//! - [`ConfiguredApps`] - Which apps have both an API URL and key
//! - [`LogEntry`], [`LogLevel`] - A streamed log line and its classification
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`RequestError`] - Cloneable network/application failure for messages
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ### Display Helpers (`duration`)
//! - [`sleep_duration_label()`] - "≈ 1 hour 1 minute" style labels
//!
//! ## Prelude
//!
//! ```rust
//! use hdash_core::prelude::*;
//! ```

pub mod duration;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use duration::sleep_duration_label;
pub use error::{Error, RequestError, Result, ResultExt};
pub use types::{is_configured, AppId, ConfiguredApps, LogEntry, LogLevel};
