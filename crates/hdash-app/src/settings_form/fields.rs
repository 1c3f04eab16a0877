//! Form fields and the per-app panel descriptor

use hdash_core::AppId;

/// How a field is edited and compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text, masked unless being edited
    Secret,
    Integer,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    Connection,
    Core,
    Advanced,
}

impl FieldGroup {
    pub fn title(&self) -> &'static str {
        match self {
            FieldGroup::Connection => "Connection",
            FieldGroup::Core => "Hunting",
            FieldGroup::Advanced => "Advanced",
        }
    }
}

/// Every control a settings panel can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ApiUrl,
    ApiKey,

    HuntMissingShows,
    HuntUpgradeEpisodes,
    SleepDuration,
    StateResetIntervalHours,
    MonitoredOnly,
    SkipFutureEpisodes,
    SkipSeriesRefresh,

    ApiTimeout,
    DebugMode,
    CommandWaitDelay,
    CommandWaitAttempts,
    MinimumDownloadQueueSize,
    RandomMissing,
    RandomUpgrades,
}

impl FormField {
    pub fn kind(&self) -> FieldKind {
        use FormField::*;
        match self {
            ApiUrl => FieldKind::Text,
            ApiKey => FieldKind::Secret,
            HuntMissingShows | HuntUpgradeEpisodes | SleepDuration | StateResetIntervalHours
            | ApiTimeout | CommandWaitDelay | CommandWaitAttempts | MinimumDownloadQueueSize => {
                FieldKind::Integer
            }
            MonitoredOnly | SkipFutureEpisodes | SkipSeriesRefresh | DebugMode | RandomMissing
            | RandomUpgrades => FieldKind::Toggle,
        }
    }

    pub fn group(&self) -> FieldGroup {
        use FormField::*;
        match self {
            ApiUrl | ApiKey => FieldGroup::Connection,
            HuntMissingShows | HuntUpgradeEpisodes | SleepDuration | StateResetIntervalHours
            | MonitoredOnly | SkipFutureEpisodes | SkipSeriesRefresh => FieldGroup::Core,
            ApiTimeout | DebugMode | CommandWaitDelay | CommandWaitAttempts
            | MinimumDownloadQueueSize | RandomMissing | RandomUpgrades => FieldGroup::Advanced,
        }
    }

    pub fn label(&self) -> &'static str {
        use FormField::*;
        match self {
            ApiUrl => "API URL",
            ApiKey => "API Key",
            HuntMissingShows => "Missing Shows to Search",
            HuntUpgradeEpisodes => "Episodes to Upgrade",
            SleepDuration => "Search Interval (seconds)",
            StateResetIntervalHours => "State Reset Interval (hours)",
            MonitoredOnly => "Monitored Only",
            SkipFutureEpisodes => "Skip Future Episodes",
            SkipSeriesRefresh => "Skip Series Refresh",
            ApiTimeout => "API Timeout (seconds)",
            DebugMode => "Debug Mode",
            CommandWaitDelay => "Command Wait Delay",
            CommandWaitAttempts => "Command Wait Attempts",
            MinimumDownloadQueueSize => "Minimum Download Queue Size",
            RandomMissing => "Random Missing",
            RandomUpgrades => "Random Upgrades",
        }
    }

    /// Default applied on load when the value is missing (or zero, see
    /// [`FormField::zero_falls_back`]). `None` for non-integer fields.
    pub fn load_default(&self) -> Option<i64> {
        use FormField::*;
        match self {
            HuntMissingShows => Some(1),
            HuntUpgradeEpisodes => Some(5),
            _ => self.save_default(),
        }
    }

    /// Default applied on save when the text does not parse (or parses to
    /// zero, see [`FormField::zero_falls_back`]).
    pub fn save_default(&self) -> Option<i64> {
        use FormField::*;
        match self {
            HuntMissingShows | HuntUpgradeEpisodes => Some(0),
            SleepDuration => Some(900),
            StateResetIntervalHours => Some(168),
            ApiTimeout => Some(60),
            CommandWaitDelay => Some(1),
            CommandWaitAttempts => Some(600),
            MinimumDownloadQueueSize => Some(-1),
            _ => None,
        }
    }

    /// For these integers a zero counts as "unset" and takes the default.
    pub fn zero_falls_back(&self) -> bool {
        self.kind() == FieldKind::Integer
            && !matches!(self, FormField::HuntMissingShows | FormField::HuntUpgradeEpisodes)
    }

    /// Default for a toggle whose value is missing. `None` for non-toggles.
    pub fn toggle_default(&self) -> Option<bool> {
        use FormField::*;
        match self {
            MonitoredOnly | SkipFutureEpisodes | RandomMissing | RandomUpgrades => Some(true),
            SkipSeriesRefresh | DebugMode => Some(false),
            _ => None,
        }
    }

    /// Resolve a loaded integer against the load default.
    pub fn resolve_loaded(&self, value: Option<i64>) -> i64 {
        self.resolve(value, self.load_default())
    }

    /// Resolve a parsed form value against the save default.
    pub fn resolve_saved(&self, value: Option<i64>) -> i64 {
        self.resolve(value, self.save_default())
    }

    fn resolve(&self, value: Option<i64>, default: Option<i64>) -> i64 {
        let default = default.unwrap_or(0);
        match value {
            Some(0) if self.zero_falls_back() => default,
            Some(n) => n,
            None => default,
        }
    }
}

const CONNECTION_FIELDS: &[FormField] = &[FormField::ApiUrl, FormField::ApiKey];

const PRIMARY_FIELDS: &[FormField] = &[
    FormField::ApiUrl,
    FormField::ApiKey,
    FormField::HuntMissingShows,
    FormField::HuntUpgradeEpisodes,
    FormField::SleepDuration,
    FormField::StateResetIntervalHours,
    FormField::MonitoredOnly,
    FormField::SkipFutureEpisodes,
    FormField::SkipSeriesRefresh,
    FormField::ApiTimeout,
    FormField::DebugMode,
    FormField::CommandWaitDelay,
    FormField::CommandWaitAttempts,
    FormField::MinimumDownloadQueueSize,
    FormField::RandomMissing,
    FormField::RandomUpgrades,
];

/// Which controls an app's settings panel has, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSpec {
    pub app: AppId,
    pub fields: &'static [FormField],
}

impl PanelSpec {
    pub fn for_app(app: AppId) -> Self {
        let fields = if app.is_primary() {
            PRIMARY_FIELDS
        } else {
            CONNECTION_FIELDS
        };
        Self { app, fields }
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.fields.contains(&field)
    }

    pub fn has_tunables(&self) -> bool {
        self.fields.iter().any(|f| f.group() != FieldGroup::Connection)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, index: usize) -> Option<FormField> {
        self.fields.get(index).copied()
    }
}
