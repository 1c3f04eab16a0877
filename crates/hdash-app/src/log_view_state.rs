//! Log view state - scroll geometry, auto-scroll and the bounded line buffer.
//!
//! Geometry is tracked in pixels the way a scrolling pane reports it
//! (`scroll_top`, `content_height`, `viewport_height`). The TUI works in rows,
//! so every row counts as [`ROW_HEIGHT_PX`].

use std::collections::VecDeque;

use hdash_core::LogEntry;

/// Height of one rendered log row
pub const ROW_HEIGHT_PX: u32 = 16;

/// Auto-scroll is released when a manual scroll leaves more than this many
/// pixels below the viewport.
pub const AUTO_SCROLL_RELEASE_GAP_PX: u32 = 20;

// ─────────────────────────────────────────────────────────────────────────────
// LogViewState
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogViewState {
    /// Distance scrolled from the top of the content
    pub scroll_top: u32,
    /// Total height of all rows
    pub content_height: u32,
    /// Height of the visible area
    pub viewport_height: u32,
    /// Whether new content pins the view to the bottom
    pub auto_scroll: bool,
}

impl Default for LogViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl LogViewState {
    pub fn new() -> Self {
        Self {
            scroll_top: 0,
            content_height: 0,
            viewport_height: 0,
            auto_scroll: true,
        }
    }

    fn max_scroll_top(&self) -> u32 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Space left below the viewport: `content - scroll_top - viewport`
    pub fn bottom_gap(&self) -> u32 {
        self.content_height
            .saturating_sub(self.scroll_top)
            .saturating_sub(self.viewport_height)
    }

    /// Index of the first visible row
    pub fn first_visible_row(&self) -> usize {
        (self.scroll_top / ROW_HEIGHT_PX) as usize
    }

    pub fn visible_rows(&self) -> usize {
        (self.viewport_height / ROW_HEIGHT_PX) as usize
    }

    /// Record the row counts. Pins to the bottom when auto-scroll is on,
    /// otherwise only clamps the scroll position to the new content.
    pub fn update_content_size(&mut self, total_rows: usize, visible_rows: usize) {
        self.content_height = rows_to_px(total_rows);
        self.viewport_height = rows_to_px(visible_rows);

        if self.auto_scroll {
            self.scroll_top = self.max_scroll_top();
        } else {
            self.scroll_top = self.scroll_top.min(self.max_scroll_top());
        }
    }

    /// Apply a user-initiated scroll, then release auto-scroll if the view
    /// is no longer near the bottom.
    pub fn scroll_by(&mut self, delta_px: i64) {
        let target = (i64::from(self.scroll_top) + delta_px).clamp(0, i64::from(self.max_scroll_top()));
        self.scroll_top = u32::try_from(target).unwrap_or(0);
        self.after_user_scroll();
    }

    fn after_user_scroll(&mut self) {
        if self.bottom_gap() > AUTO_SCROLL_RELEASE_GAP_PX {
            self.auto_scroll = false;
        }
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_by(-i64::from(rows_to_px(rows)));
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_by(i64::from(rows_to_px(rows)));
    }

    pub fn page_up(&mut self) {
        let page = self.visible_rows().saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_rows().saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_top = 0;
        self.after_user_scroll();
    }

    /// Jump to the bottom without changing the auto-scroll flag
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_top = self.max_scroll_top();
    }

    /// Set the auto-scroll flag; turning it on snaps to the bottom at once.
    pub fn set_auto_scroll(&mut self, enabled: bool) {
        self.auto_scroll = enabled;
        if enabled {
            self.scroll_to_bottom();
        }
    }

    pub fn toggle_auto_scroll(&mut self) {
        self.set_auto_scroll(!self.auto_scroll);
    }
}

fn rows_to_px(rows: usize) -> u32 {
    u32::try_from(rows)
        .unwrap_or(u32::MAX)
        .saturating_mul(ROW_HEIGHT_PX)
}

// ─────────────────────────────────────────────────────────────────────────────
// LogPane
// ─────────────────────────────────────────────────────────────────────────────

/// The log pane: bounded entry buffer plus its view state.
#[derive(Debug, Clone)]
pub struct LogPane {
    pub entries: VecDeque<LogEntry>,
    pub view: LogViewState,
    max_entries: usize,
    next_id: u64,
}

impl LogPane {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            view: LogViewState::new(),
            max_entries: max_entries.max(1),
            next_id: 0,
        }
    }

    /// Append a line, dropping the oldest entries past the cap.
    pub fn push(&mut self, line: String) {
        self.next_id += 1;
        self.entries.push_back(LogEntry::new(self.next_id, line));
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
        self.refresh_geometry();
    }

    /// Empty the pane. The view keeps its auto-scroll flag.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.refresh_geometry();
    }

    /// Record a new viewport height in rows (reported by the renderer).
    pub fn set_viewport_rows(&mut self, rows: usize) {
        let total = self.entries.len();
        self.view.update_content_size(total, rows);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn refresh_geometry(&mut self) {
        let visible = self.view.visible_rows();
        self.view.update_content_size(self.entries.len(), visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with(total: usize, visible: usize) -> LogViewState {
        let mut view = LogViewState::new();
        view.update_content_size(total, visible);
        view
    }

    #[test]
    fn test_auto_scroll_pins_to_bottom() {
        let view = view_with(100, 10);
        assert_eq!(view.scroll_top, 90 * ROW_HEIGHT_PX);
        assert_eq!(view.bottom_gap(), 0);
        assert_eq!(view.first_visible_row(), 90);
    }

    #[test]
    fn test_small_scroll_keeps_auto_scroll() {
        let mut view = view_with(100, 10);
        // 20px gap is not "more than" the threshold
        view.scroll_by(-20);
        assert_eq!(view.bottom_gap(), 20);
        assert!(view.auto_scroll);
    }

    #[test]
    fn test_scroll_past_threshold_releases_auto_scroll() {
        let mut view = view_with(100, 10);
        view.scroll_up(2);
        assert_eq!(view.bottom_gap(), 32);
        assert!(!view.auto_scroll);
    }

    #[test]
    fn test_content_growth_while_released_keeps_position() {
        let mut view = view_with(100, 10);
        view.scroll_up(5);
        let before = view.scroll_top;

        view.update_content_size(150, 10);
        assert_eq!(view.scroll_top, before);
        assert!(!view.auto_scroll);
    }

    #[test]
    fn test_scrolling_back_down_does_not_reengage() {
        let mut view = view_with(100, 10);
        view.scroll_up(5);
        view.scroll_down(5);
        assert_eq!(view.bottom_gap(), 0);
        assert!(!view.auto_scroll);
    }

    #[test]
    fn test_enabling_auto_scroll_snaps_to_bottom() {
        let mut view = view_with(100, 10);
        view.scroll_to_top();
        assert!(!view.auto_scroll);

        view.set_auto_scroll(true);
        assert!(view.auto_scroll);
        assert_eq!(view.bottom_gap(), 0);
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut view = view_with(5, 10);
        view.scroll_up(3);
        assert_eq!(view.scroll_top, 0);
        view.scroll_down(3);
        assert_eq!(view.scroll_top, 0);
    }

    #[test]
    fn test_pane_caps_entries_dropping_oldest() {
        let mut pane = LogPane::new(3);
        for i in 0..5 {
            pane.push(format!("line {i}"));
        }
        assert_eq!(pane.len(), 3);
        assert_eq!(pane.entries[0].message, "line 2");
        assert_eq!(pane.entries[2].message, "line 4");
    }

    #[test]
    fn test_pane_push_while_released_does_not_move_view() {
        let mut pane = LogPane::new(1000);
        pane.set_viewport_rows(10);
        for i in 0..50 {
            pane.push(format!("line {i}"));
        }
        pane.view.scroll_up(10);
        let before = pane.view.scroll_top;

        pane.push("a - ERROR - b".into());
        assert_eq!(pane.view.scroll_top, before);
        assert_eq!(pane.len(), 51);
    }

    #[test]
    fn test_pane_push_follows_when_auto_scroll_on() {
        let mut pane = LogPane::new(1000);
        pane.set_viewport_rows(10);
        for i in 0..50 {
            pane.push(format!("line {i}"));
        }
        assert_eq!(pane.view.first_visible_row(), 40);
        assert_eq!(pane.view.bottom_gap(), 0);
    }

    #[test]
    fn test_pane_clear() {
        let mut pane = LogPane::new(10);
        pane.set_viewport_rows(4);
        pane.push("x".into());
        pane.clear();
        assert!(pane.is_empty());
        assert_eq!(pane.view.content_height, 0);
        assert_eq!(pane.view.scroll_top, 0);
    }
}
