//! Human-readable label for the sleep-duration setting

/// Render a sleep duration in seconds the way the settings panel shows it.
///
/// - under a minute: `"N seconds"`
/// - under an hour: `"≈ M minute(s)"`
/// - otherwise: `"≈ H hour(s)"` plus `" M minute(s)"` if the remainder is non-zero
///
/// All divisions floor. Negative input is treated as "under a minute".
pub fn sleep_duration_label(seconds: i64) -> String {
    if seconds < 60 {
        return format!("{seconds} seconds");
    }

    if seconds < 3600 {
        let minutes = seconds / 60;
        return format!("≈ {}", plural(minutes, "minute"));
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if minutes == 0 {
        format!("≈ {}", plural(hours, "hour"))
    } else {
        format!("≈ {} {}", plural(hours, "hour"), plural(minutes, "minute"))
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
