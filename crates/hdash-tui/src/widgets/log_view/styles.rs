//! Log line formatting

use hdash_core::LogEntry;
use ratatui::text::{Line, Span};

use crate::theme::{styles, Palette};

pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// One pane row for `entry`. Embedded newlines are flattened so every
/// entry keeps a single row.
pub fn entry_line(entry: &LogEntry, show_timestamps: bool, p: &Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(3);
    if show_timestamps {
        spans.push(Span::styled(
            entry.received_at.format(TIMESTAMP_FORMAT).to_string(),
            styles::text_muted(p),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        entry.message.replace(['\r', '\n'], " "),
        styles::log_level(p, entry.level),
    ));
    Line::from(spans)
}
