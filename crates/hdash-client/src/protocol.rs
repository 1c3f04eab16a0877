//! Wire types for the Huntarr REST API
//!
//! Response types are deliberately loose: every field is optional and
//! numbers/bools are read leniently, so a partially populated or slightly
//! malformed payload still loads. Defaults are applied by the caller.

use hdash_core::AppId;
use serde::{Deserialize, Deserializer, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Settings reads
// ─────────────────────────────────────────────────────────────────────────────

/// `GET /api/settings`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GlobalSettingsResponse {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub huntarr: Option<CoreSettingsWire>,
    #[serde(default)]
    pub advanced: Option<AdvancedSettingsWire>,
}

/// The `huntarr` block as the server sent it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CoreSettingsWire {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub hunt_missing_shows: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub hunt_upgrade_episodes: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub sleep_duration: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub state_reset_interval_hours: Option<i64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub monitored_only: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub skip_future_episodes: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub skip_series_refresh: Option<bool>,
}

/// The `advanced` block as the server sent it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AdvancedSettingsWire {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub api_timeout: Option<i64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub debug_mode: Option<bool>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub command_wait_delay: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub command_wait_attempts: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub minimum_download_queue_size: Option<i64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub random_missing: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub random_upgrades: Option<bool>,
}

/// `GET /api/app-settings?app={id}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppSettingsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings writes
// ─────────────────────────────────────────────────────────────────────────────

/// Fully resolved `huntarr` block, as stored in a snapshot and sent on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreSettings {
    pub hunt_missing_shows: i64,
    pub hunt_upgrade_episodes: i64,
    pub sleep_duration: i64,
    pub state_reset_interval_hours: i64,
    pub monitored_only: bool,
    pub skip_future_episodes: bool,
    pub skip_series_refresh: bool,
}

/// Fully resolved `advanced` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedSettings {
    pub debug_mode: bool,
    pub command_wait_delay: i64,
    pub command_wait_attempts: i64,
    pub minimum_download_queue_size: i64,
    pub random_missing: bool,
    pub random_upgrades: bool,
    pub api_timeout: i64,
}

/// `POST /api/settings`
///
/// `huntarr` and `advanced` are only present for the primary app.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveSettingsRequest {
    pub app_type: AppId,
    pub api_url: String,
    pub api_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huntarr: Option<CoreSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced: Option<AdvancedSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SaveSettingsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub changes_made: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /api/settings/reset`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResetRequest {
    pub app: AppId,
}

/// `POST /api/test-connection`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestConnectionRequest {
    pub app: AppId,
    pub api_url: String,
    pub api_key: String,
}

/// Generic `{ success, message? }` reply (reset, test-connection).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThemeResponse {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub dark_mode: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThemeRequest {
    pub dark_mode: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Lenient field readers
// ─────────────────────────────────────────────────────────────────────────────

/// Accept a JSON number, a numeric string, or anything else as `None`.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Accept a JSON bool; anything else reads as absent.
fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Bool(b)) => Some(b),
        _ => None,
    })
}
