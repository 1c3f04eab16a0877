//! Settings panel value formatting

use hdash_app::settings_form::{lenient_int, FormField};
use hdash_core::sleep_duration_label;

/// Label column width
pub const LABEL_WIDTH: usize = 30;

/// Fallback for the sleep label when the field does not parse
pub const SLEEP_LABEL_FALLBACK_SECS: i64 = 900;

pub const MASK_CHAR: char = '•';

/// Mask a secret, one bullet per character
pub fn mask(value: &str) -> String {
    value.chars().map(|_| MASK_CHAR).collect()
}

pub fn toggle(value: bool) -> &'static str {
    if value {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Hint shown after the sleep-duration value, computed from the current text.
/// Zero or unparsable text shows the fallback.
pub fn sleep_hint(text: &str) -> String {
    let secs = lenient_int(text)
        .filter(|&s| s != 0)
        .unwrap_or(SLEEP_LABEL_FALLBACK_SECS);
    sleep_duration_label(secs)
}

/// Extra hint shown after some fields
pub fn field_hint(field: FormField, text: &str) -> Option<String> {
    match field {
        FormField::SleepDuration => Some(sleep_hint(text)),
        FormField::MinimumDownloadQueueSize => Some("-1 = no limit".to_string()),
        _ => None,
    }
}
