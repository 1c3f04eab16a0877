//! Live form state and the settings controller operations

use std::collections::HashMap;

use hdash_client::{AdvancedSettings, CoreSettings, SaveSettingsRequest};
use hdash_core::{AppId, ConfiguredApps};

use super::fields::{FieldKind, FormField, PanelSpec};
use super::snapshot::{FieldValue, SettingsSnapshot};

/// Parse an integer the way the panel accepts it: surrounding whitespace is
/// ignored and the longest leading `[+-]?digits` prefix is used.
///
/// `"15 min"` → `Some(15)`, `"-3x"` → `Some(-3)`, `"abc"` / `""` → `None`.
pub fn lenient_int(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

// ─────────────────────────────────────────────────────────────────────────────
// Connection status label
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    Configured,
    #[default]
    NotConfigured,
    Testing,
    Connected,
    ConnectionFailed,
    ConnectionError,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Configured => "Configured",
            ConnectionStatus::NotConfigured => "Not Configured",
            ConnectionStatus::Testing => "Testing...",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::ConnectionFailed => "Connection Failed",
            ConnectionStatus::ConnectionError => "Connection Error",
        }
    }

    pub fn from_configured(configured: bool) -> Self {
        if configured {
            ConnectionStatus::Configured
        } else {
            ConnectionStatus::NotConfigured
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Form values
// ─────────────────────────────────────────────────────────────────────────────

/// Raw control contents: typed text for text/integer fields, a flag for toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Toggle(bool),
}

/// The on-screen controls of one app's panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    inputs: HashMap<FormField, FieldInput>,
}

impl FormValues {
    /// Empty controls for a panel: blank text, toggles at their defaults.
    pub fn blank(panel: &PanelSpec) -> Self {
        let inputs = panel
            .fields
            .iter()
            .map(|&field| {
                let input = match field.kind() {
                    FieldKind::Toggle => FieldInput::Toggle(field.toggle_default().unwrap_or(false)),
                    _ => FieldInput::Text(String::new()),
                };
                (field, input)
            })
            .collect();
        Self { inputs }
    }

    /// Write every field the snapshot carries into the controls.
    pub fn fill_from(&mut self, panel: &PanelSpec, snapshot: &SettingsSnapshot) {
        for &field in panel.fields {
            let input = match snapshot.value(field) {
                Some(FieldValue::Text(s)) => FieldInput::Text(s),
                Some(FieldValue::Int(n)) => FieldInput::Text(n.to_string()),
                Some(FieldValue::Bool(b)) => FieldInput::Toggle(b),
                None => continue,
            };
            self.inputs.insert(field, input);
        }
    }

    pub fn text(&self, field: FormField) -> &str {
        match self.inputs.get(&field) {
            Some(FieldInput::Text(s)) => s,
            _ => "",
        }
    }

    pub fn toggle(&self, field: FormField) -> bool {
        match self.inputs.get(&field) {
            Some(FieldInput::Toggle(b)) => *b,
            _ => field.toggle_default().unwrap_or(false),
        }
    }

    pub fn set_text(&mut self, field: FormField, value: impl Into<String>) {
        self.inputs.insert(field, FieldInput::Text(value.into()));
    }

    pub fn set_toggle(&mut self, field: FormField, value: bool) {
        self.inputs.insert(field, FieldInput::Toggle(value));
    }

    /// Integer as it would be submitted
    pub fn int_for_save(&self, field: FormField) -> i64 {
        field.resolve_saved(lenient_int(self.text(field)))
    }

    /// Does the control still hold `expected`?
    fn matches(&self, field: FormField, expected: &FieldValue) -> bool {
        match (field.kind(), expected) {
            (FieldKind::Text | FieldKind::Secret, FieldValue::Text(s)) => self.text(field) == s,
            (FieldKind::Integer, FieldValue::Int(n)) => lenient_int(self.text(field)) == Some(*n),
            (FieldKind::Toggle, FieldValue::Bool(b)) => self.toggle(field) == *b,
            _ => false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Edit buffer
// ─────────────────────────────────────────────────────────────────────────────

/// In-progress edit of one text or integer field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub field: FormField,
    pub buffer: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// SettingsForm
// ─────────────────────────────────────────────────────────────────────────────

/// The settings form controller: per-app controls, snapshots and labels.
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    snapshots: HashMap<AppId, SettingsSnapshot>,
    values: HashMap<AppId, FormValues>,
    status: HashMap<AppId, ConnectionStatus>,
    /// Result of the last change check
    pub save_enabled: bool,
    /// Cursor within the active panel
    pub selected: usize,
    pub editing: Option<EditBuffer>,
    /// Save submitted and not yet answered
    pub pending_save: Option<SaveSettingsRequest>,
}

impl SettingsForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self, app: AppId) -> Option<&SettingsSnapshot> {
        self.snapshots.get(&app)
    }

    pub fn status(&self, app: AppId) -> ConnectionStatus {
        self.status.get(&app).copied().unwrap_or_default()
    }

    pub fn set_status(&mut self, app: AppId, status: ConnectionStatus) {
        self.status.insert(app, status);
    }

    /// Controls of `app`'s panel, blank until first loaded.
    pub fn values(&self, app: AppId) -> FormValues {
        self.values
            .get(&app)
            .cloned()
            .unwrap_or_else(|| FormValues::blank(&PanelSpec::for_app(app)))
    }

    pub fn values_mut(&mut self, app: AppId) -> &mut FormValues {
        self.values
            .entry(app)
            .or_insert_with(|| FormValues::blank(&PanelSpec::for_app(app)))
    }

    /// Install a freshly loaded snapshot: populate the controls, store the
    /// baseline and refresh the configured flag and status label.
    pub fn apply_loaded(
        &mut self,
        app: AppId,
        snapshot: SettingsSnapshot,
        configured: &mut ConfiguredApps,
    ) {
        let panel = PanelSpec::for_app(app);
        self.values_mut(app).fill_from(&panel, &snapshot);

        let is_configured = snapshot.is_configured();
        configured.set(app, is_configured);
        self.set_status(app, ConnectionStatus::from_configured(is_configured));
        self.snapshots.insert(app, snapshot);
    }

    /// Compare every field of `app`'s panel against its snapshot and record
    /// the result in `save_enabled`. Without a snapshot, returns `false` and
    /// leaves `save_enabled` alone.
    pub fn check_for_changes(&mut self, app: AppId) -> bool {
        let Some(snapshot) = self.snapshots.get(&app) else {
            return false;
        };
        let values = self.values(app);
        let panel = PanelSpec::for_app(app);

        let changed = panel.fields.iter().any(|&field| match snapshot.value(field) {
            Some(expected) => !values.matches(field, &expected),
            None => true,
        });

        self.save_enabled = changed;
        changed
    }

    /// Build the save payload for `app`, or `None` if nothing changed.
    pub fn build_save_request(&mut self, app: AppId) -> Option<SaveSettingsRequest> {
        if !self.check_for_changes(app) {
            return None;
        }

        let values = self.values(app);
        let (huntarr, advanced) = if app.is_primary() {
            (Some(core_from_form(&values)), Some(advanced_from_form(&values)))
        } else {
            (None, None)
        };

        Some(SaveSettingsRequest {
            app_type: app,
            api_url: values.text(FormField::ApiUrl).to_string(),
            api_key: values.text(FormField::ApiKey).to_string(),
            huntarr,
            advanced,
        })
    }

    /// The server accepted `request`: it becomes the new baseline.
    ///
    /// Integer controls whose text still resolves to the submitted value are
    /// rewritten to that canonical value, so a fallback like `"0"` → `900`
    /// does not leave the form dirty. Controls edited since submission are
    /// left as they are.
    pub fn apply_saved(&mut self, request: &SaveSettingsRequest, configured: &mut ConfiguredApps) {
        let app = request.app_type;
        let snapshot = SettingsSnapshot::from_request(request);
        let panel = PanelSpec::for_app(app);

        let values = self.values_mut(app);
        for &field in panel.fields {
            if field.kind() != FieldKind::Integer {
                continue;
            }
            if let Some(FieldValue::Int(saved)) = snapshot.value(field) {
                if values.int_for_save(field) == saved {
                    values.set_text(field, saved.to_string());
                }
            }
        }

        let is_configured = snapshot.is_configured();
        configured.set(app, is_configured);
        self.set_status(app, ConnectionStatus::from_configured(is_configured));
        self.snapshots.insert(app, snapshot);
    }

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────

    pub fn selected_field(&self, app: AppId) -> Option<FormField> {
        PanelSpec::for_app(app).field(self.selected)
    }

    pub fn select_next(&mut self, app: AppId) {
        let len = PanelSpec::for_app(app).len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_previous(&mut self, app: AppId) {
        let len = PanelSpec::for_app(app).len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Keep the cursor inside `app`'s panel after an app switch.
    pub fn clamp_selection(&mut self, app: AppId) {
        let len = PanelSpec::for_app(app).len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Start editing a text field, or flip a toggle. Returns `true` if a
    /// toggle was flipped (a committed change).
    pub fn activate(&mut self, app: AppId) -> bool {
        let Some(field) = self.selected_field(app) else {
            return false;
        };
        if field.kind() == FieldKind::Toggle {
            let values = self.values_mut(app);
            let current = values.toggle(field);
            values.set_toggle(field, !current);
            return true;
        }
        let buffer = self.values(app).text(field).to_string();
        self.editing = Some(EditBuffer { field, buffer });
        false
    }

    /// Write the edit buffer back into the control.
    pub fn commit_edit(&mut self, app: AppId) -> bool {
        match self.editing.take() {
            Some(edit) => {
                self.values_mut(app).set_text(edit.field, edit.buffer);
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}

fn core_from_form(values: &FormValues) -> CoreSettings {
    use FormField::*;
    CoreSettings {
        hunt_missing_shows: values.int_for_save(HuntMissingShows),
        hunt_upgrade_episodes: values.int_for_save(HuntUpgradeEpisodes),
        sleep_duration: values.int_for_save(SleepDuration),
        state_reset_interval_hours: values.int_for_save(StateResetIntervalHours),
        monitored_only: values.toggle(MonitoredOnly),
        skip_future_episodes: values.toggle(SkipFutureEpisodes),
        skip_series_refresh: values.toggle(SkipSeriesRefresh),
    }
}

fn advanced_from_form(values: &FormValues) -> AdvancedSettings {
    use FormField::*;
    AdvancedSettings {
        debug_mode: values.toggle(DebugMode),
        command_wait_delay: values.int_for_save(CommandWaitDelay),
        command_wait_attempts: values.int_for_save(CommandWaitAttempts),
        minimum_download_queue_size: values.int_for_save(MinimumDownloadQueueSize),
        random_missing: values.toggle(RandomMissing),
        random_upgrades: values.toggle(RandomUpgrades),
        api_timeout: values.int_for_save(ApiTimeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdash_client::{AppSettingsResponse, GlobalSettingsResponse};

    fn primary_snapshot() -> SettingsSnapshot {
        let resp: GlobalSettingsResponse = serde_json::from_value(serde_json::json!({
            "api_url": "http://sonarr:8989",
            "api_key": "abc",
            "huntarr": { "hunt_missing_shows": 2, "sleep_duration": 1800 },
            "advanced": {}
        }))
        .unwrap();
        SettingsSnapshot::from_global(&resp)
    }

    fn loaded_form() -> (SettingsForm, ConfiguredApps) {
        let mut form = SettingsForm::new();
        let mut configured = ConfiguredApps::default();
        form.apply_loaded(AppId::Sonarr, primary_snapshot(), &mut configured);
        (form, configured)
    }

    #[test]
    fn test_lenient_int() {
        assert_eq!(lenient_int("900"), Some(900));
        assert_eq!(lenient_int("  42  "), Some(42));
        assert_eq!(lenient_int("15 minutes"), Some(15));
        assert_eq!(lenient_int("-1"), Some(-1));
        assert_eq!(lenient_int("+7"), Some(7));
        assert_eq!(lenient_int("12.9"), Some(12));
        assert_eq!(lenient_int("abc"), None);
        assert_eq!(lenient_int(""), None);
        assert_eq!(lenient_int("-"), None);
    }

    #[test]
    fn test_load_populates_form_and_status() {
        let (form, configured) = loaded_form();
        let values = form.values(AppId::Sonarr);

        assert_eq!(values.text(FormField::ApiUrl), "http://sonarr:8989");
        assert_eq!(values.text(FormField::HuntMissingShows), "2");
        assert_eq!(values.text(FormField::SleepDuration), "1800");
        assert_eq!(values.text(FormField::StateResetIntervalHours), "168");
        assert!(values.toggle(FormField::MonitoredOnly));
        assert!(configured.sonarr);
        assert_eq!(form.status(AppId::Sonarr), ConnectionStatus::Configured);
    }

    #[test]
    fn test_no_changes_right_after_load() {
        let (mut form, _) = loaded_form();
        assert!(!form.check_for_changes(AppId::Sonarr));
        assert!(!form.save_enabled);
    }

    #[test]
    fn test_single_mutation_then_revert() {
        let (mut form, _) = loaded_form();
        form.values_mut(AppId::Sonarr).set_text(FormField::SleepDuration, "600");
        assert!(form.check_for_changes(AppId::Sonarr));
        assert!(form.save_enabled);

        form.values_mut(AppId::Sonarr).set_text(FormField::SleepDuration, "1800");
        assert!(!form.check_for_changes(AppId::Sonarr));
        assert!(!form.save_enabled);
    }

    #[test]
    fn test_integer_comparison_is_lenient() {
        let (mut form, _) = loaded_form();
        form.values_mut(AppId::Sonarr).set_text(FormField::SleepDuration, " 1800s");
        assert!(!form.check_for_changes(AppId::Sonarr));
    }

    #[test]
    fn test_unparsable_integer_counts_as_changed() {
        let (mut form, _) = loaded_form();
        form.values_mut(AppId::Sonarr).set_text(FormField::SleepDuration, "soon");
        assert!(form.check_for_changes(AppId::Sonarr));
    }

    #[test]
    fn test_toggle_change_detected() {
        let (mut form, _) = loaded_form();
        form.values_mut(AppId::Sonarr).set_toggle(FormField::RandomUpgrades, false);
        assert!(form.check_for_changes(AppId::Sonarr));
    }

    #[test]
    fn test_check_without_snapshot_is_false_and_untouched() {
        let mut form = SettingsForm::new();
        form.save_enabled = true;
        assert!(!form.check_for_changes(AppId::Radarr));
        assert!(form.save_enabled);
    }

    #[test]
    fn test_build_save_request_none_without_changes() {
        let (mut form, _) = loaded_form();
        assert_eq!(form.build_save_request(AppId::Sonarr), None);
    }

    #[test]
    fn test_build_save_request_primary_payload() {
        let (mut form, _) = loaded_form();
        let values = form.values_mut(AppId::Sonarr);
        values.set_text(FormField::HuntUpgradeEpisodes, "junk");
        values.set_text(FormField::ApiTimeout, "0");
        values.set_text(FormField::MinimumDownloadQueueSize, "3");

        let req = form.build_save_request(AppId::Sonarr).unwrap();
        assert_eq!(req.app_type, AppId::Sonarr);
        assert_eq!(req.api_key, "abc");
        let core = req.huntarr.unwrap();
        assert_eq!(core.hunt_upgrade_episodes, 0);
        assert_eq!(core.sleep_duration, 1800);
        let adv = req.advanced.unwrap();
        assert_eq!(adv.api_timeout, 60);
        assert_eq!(adv.minimum_download_queue_size, 3);
    }

    #[test]
    fn test_build_save_request_secondary_payload() {
        let mut form = SettingsForm::new();
        let mut configured = ConfiguredApps::default();
        let snap = SettingsSnapshot::from_app(&AppSettingsResponse {
            success: true,
            api_url: Some("http://radarr:7878".into()),
            api_key: Some(String::new()),
            message: None,
        });
        form.apply_loaded(AppId::Radarr, snap, &mut configured);
        assert!(!configured.radarr);
        assert_eq!(form.status(AppId::Radarr), ConnectionStatus::NotConfigured);

        form.values_mut(AppId::Radarr).set_text(FormField::ApiKey, "key");
        let req = form.build_save_request(AppId::Radarr).unwrap();
        assert_eq!(req.api_key, "key");
        assert!(req.huntarr.is_none());
        assert!(req.advanced.is_none());
    }

    #[test]
    fn test_no_changes_right_after_save() {
        let (mut form, mut configured) = loaded_form();
        form.values_mut(AppId::Sonarr).set_text(FormField::SleepDuration, "0");
        let req = form.build_save_request(AppId::Sonarr).unwrap();
        assert_eq!(req.huntarr.unwrap().sleep_duration, 900);

        form.apply_saved(&req, &mut configured);
        assert!(!form.check_for_changes(AppId::Sonarr));
        assert_eq!(form.values(AppId::Sonarr).text(FormField::SleepDuration), "900");
        assert_eq!(form.snapshot(AppId::Sonarr).unwrap().core.unwrap().sleep_duration, 900);
    }

    #[test]
    fn test_apply_saved_keeps_edit_made_in_flight() {
        let (mut form, mut configured) = loaded_form();
        form.values_mut(AppId::Sonarr).set_text(FormField::SleepDuration, "600");
        let req = form.build_save_request(AppId::Sonarr).unwrap();

        form.values_mut(AppId::Sonarr).set_text(FormField::SleepDuration, "300");
        form.apply_saved(&req, &mut configured);

        assert_eq!(form.values(AppId::Sonarr).text(FormField::SleepDuration), "300");
        assert!(form.check_for_changes(AppId::Sonarr));
    }

    #[test]
    fn test_apply_saved_recomputes_configured() {
        let (mut form, mut configured) = loaded_form();
        form.values_mut(AppId::Sonarr).set_text(FormField::ApiKey, "");
        let req = form.build_save_request(AppId::Sonarr).unwrap();
        form.apply_saved(&req, &mut configured);

        assert!(!configured.sonarr);
        assert_eq!(form.status(AppId::Sonarr), ConnectionStatus::NotConfigured);
    }

    #[test]
    fn test_activate_toggle_and_edit_text() {
        let (mut form, _) = loaded_form();
        form.selected = PanelSpec::for_app(AppId::Sonarr)
            .fields
            .iter()
            .position(|f| *f == FormField::DebugMode)
            .unwrap();
        assert!(form.activate(AppId::Sonarr));
        assert!(form.values(AppId::Sonarr).toggle(FormField::DebugMode));

        form.selected = 0;
        assert!(!form.activate(AppId::Sonarr));
        let edit = form.editing.as_mut().unwrap();
        assert_eq!(edit.buffer, "http://sonarr:8989");
        edit.buffer.push('/');
        assert!(form.commit_edit(AppId::Sonarr));
        assert_eq!(form.values(AppId::Sonarr).text(FormField::ApiUrl), "http://sonarr:8989/");
    }

    #[test]
    fn test_selection_wraps_and_clamps() {
        let mut form = SettingsForm::new();
        form.select_previous(AppId::Radarr);
        assert_eq!(form.selected, 1);
        form.select_next(AppId::Radarr);
        assert_eq!(form.selected, 0);

        form.selected = 10;
        form.clamp_selection(AppId::Lidarr);
        assert_eq!(form.selected, 1);
    }
}
