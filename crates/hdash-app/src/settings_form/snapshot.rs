//! Settings snapshot: the dirty-check baseline for one app

use hdash_client::{
    AdvancedSettings, AdvancedSettingsWire, AppSettingsResponse, CoreSettings, CoreSettingsWire,
    GlobalSettingsResponse, SaveSettingsRequest,
};

use super::fields::FormField;

/// A typed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Bool(bool),
}

/// Last successfully loaded or saved settings for one app, with every
/// default already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSnapshot {
    pub api_url: String,
    pub api_key: String,
    /// Only present for the primary app
    pub core: Option<CoreSettings>,
    pub advanced: Option<AdvancedSettings>,
}

impl SettingsSnapshot {
    /// Primary app: connection and tunables all come from `GET /api/settings`.
    pub fn from_global(resp: &GlobalSettingsResponse) -> Self {
        Self {
            api_url: resp.api_url.clone().unwrap_or_default(),
            api_key: resp.api_key.clone().unwrap_or_default(),
            core: Some(core_from_wire(&resp.huntarr.clone().unwrap_or_default())),
            advanced: Some(advanced_from_wire(&resp.advanced.clone().unwrap_or_default())),
        }
    }

    /// Secondary app: connection only.
    pub fn from_app(resp: &AppSettingsResponse) -> Self {
        Self {
            api_url: resp.api_url.clone().unwrap_or_default(),
            api_key: resp.api_key.clone().unwrap_or_default(),
            core: None,
            advanced: None,
        }
    }

    /// The values that were just submitted and accepted.
    pub fn from_request(req: &SaveSettingsRequest) -> Self {
        Self {
            api_url: req.api_url.clone(),
            api_key: req.api_key.clone(),
            core: req.huntarr,
            advanced: req.advanced,
        }
    }

    pub fn is_configured(&self) -> bool {
        hdash_core::is_configured(&self.api_url, &self.api_key)
    }

    /// Value of `field`, or `None` if this snapshot has no such field.
    pub fn value(&self, field: FormField) -> Option<FieldValue> {
        use FormField::*;
        let core = self.core.as_ref();
        let adv = self.advanced.as_ref();
        match field {
            ApiUrl => Some(FieldValue::Text(self.api_url.clone())),
            ApiKey => Some(FieldValue::Text(self.api_key.clone())),
            HuntMissingShows => core.map(|c| FieldValue::Int(c.hunt_missing_shows)),
            HuntUpgradeEpisodes => core.map(|c| FieldValue::Int(c.hunt_upgrade_episodes)),
            SleepDuration => core.map(|c| FieldValue::Int(c.sleep_duration)),
            StateResetIntervalHours => core.map(|c| FieldValue::Int(c.state_reset_interval_hours)),
            MonitoredOnly => core.map(|c| FieldValue::Bool(c.monitored_only)),
            SkipFutureEpisodes => core.map(|c| FieldValue::Bool(c.skip_future_episodes)),
            SkipSeriesRefresh => core.map(|c| FieldValue::Bool(c.skip_series_refresh)),
            ApiTimeout => adv.map(|a| FieldValue::Int(a.api_timeout)),
            DebugMode => adv.map(|a| FieldValue::Bool(a.debug_mode)),
            CommandWaitDelay => adv.map(|a| FieldValue::Int(a.command_wait_delay)),
            CommandWaitAttempts => adv.map(|a| FieldValue::Int(a.command_wait_attempts)),
            MinimumDownloadQueueSize => adv.map(|a| FieldValue::Int(a.minimum_download_queue_size)),
            RandomMissing => adv.map(|a| FieldValue::Bool(a.random_missing)),
            RandomUpgrades => adv.map(|a| FieldValue::Bool(a.random_upgrades)),
        }
    }
}

fn toggle(field: FormField, value: Option<bool>) -> bool {
    value.unwrap_or_else(|| field.toggle_default().unwrap_or(false))
}

fn core_from_wire(wire: &CoreSettingsWire) -> CoreSettings {
    use FormField::*;
    CoreSettings {
        hunt_missing_shows: HuntMissingShows.resolve_loaded(wire.hunt_missing_shows),
        hunt_upgrade_episodes: HuntUpgradeEpisodes.resolve_loaded(wire.hunt_upgrade_episodes),
        sleep_duration: SleepDuration.resolve_loaded(wire.sleep_duration),
        state_reset_interval_hours: StateResetIntervalHours
            .resolve_loaded(wire.state_reset_interval_hours),
        monitored_only: toggle(MonitoredOnly, wire.monitored_only),
        skip_future_episodes: toggle(SkipFutureEpisodes, wire.skip_future_episodes),
        skip_series_refresh: toggle(SkipSeriesRefresh, wire.skip_series_refresh),
    }
}

fn advanced_from_wire(wire: &AdvancedSettingsWire) -> AdvancedSettings {
    use FormField::*;
    AdvancedSettings {
        debug_mode: toggle(DebugMode, wire.debug_mode),
        command_wait_delay: CommandWaitDelay.resolve_loaded(wire.command_wait_delay),
        command_wait_attempts: CommandWaitAttempts.resolve_loaded(wire.command_wait_attempts),
        minimum_download_queue_size: MinimumDownloadQueueSize
            .resolve_loaded(wire.minimum_download_queue_size),
        random_missing: toggle(RandomMissing, wire.random_missing),
        random_upgrades: toggle(RandomUpgrades, wire.random_upgrades),
        api_timeout: ApiTimeout.resolve_loaded(wire.api_timeout),
    }
}
