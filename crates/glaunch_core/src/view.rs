//! The multilist view widget.
//!
//! Owns cursor, viewport, display mode, and listener dispatch. All
//! navigation is total: boundary and empty-source conditions saturate or
//! no-op instead of erroring, so the UI stays interactive with zero data.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::source::{Cursor, MultilistSource, SelectionEvent};

/// Header row styling shared by both display modes.
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

type Listener<T> = Box<dyn FnMut(&SelectionEvent<T>)>;

/// Display mode of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// All sublists visible, cursor crosses sublist boundaries.
    Multi,
    /// Only the named sublist is visible and navigable; the cursor's
    /// sublist component is pinned to it.
    Single {
        /// Index of the active sublist in key order.
        sublist: usize,
    },
}

/// What a flattened row resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Header(usize),
    Item(usize, usize),
}

/// Scrollable multi-sublist view over a [`MultilistSource`].
///
/// A fresh view has no source and renders blank. Assigning a source resets
/// cursor, viewport, and mode to the defaults (top-left, multi-list).
pub struct MultilistView<S: MultilistSource> {
    source: Option<S>,
    cursor: Cursor,
    /// Top of the viewport: a flattened row index in multi-list mode, a
    /// local row offset into the active sublist's header+items run in
    /// single-list mode.
    top_row: usize,
    /// Horizontal scroll offset, `0 <= left < max(1, max_row_width())`.
    left: usize,
    mode: ListMode,
    /// Height the viewport was last given; navigation renormalizes against
    /// this, render refreshes it from the actual area.
    frame_height: u16,
    /// Global index of the last selection-changed notification, used to
    /// suppress idempotent re-fires.
    last_notified: Option<usize>,
    selection_listeners: Vec<Listener<S::Item>>,
    open_listeners: Vec<Listener<S::Item>>,
}

impl<S: MultilistSource> Default for MultilistView<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MultilistSource> MultilistView<S> {
    pub fn new() -> Self {
        Self {
            source: None,
            cursor: Cursor::default(),
            top_row: 0,
            left: 0,
            mode: ListMode::Multi,
            frame_height: 0,
            last_notified: None,
            selection_listeners: Vec::new(),
            open_listeners: Vec::new(),
        }
    }

    /// Assign a new source, resetting cursor, viewport, and mode.
    ///
    /// The initial selection is the first item of the first non-empty
    /// sublist. No selection-changed event fires for the reset itself; the
    /// owner just assigned the source and knows where the cursor is.
    ///
    /// # Panics
    /// Panics if the source's per-sublist counts do not sum to its
    /// `total_count()` (an inconsistent source is an embedding bug).
    pub fn set_source(&mut self, source: S) {
        Self::check_consistency(&source);
        self.cursor = Self::first_occupied(&source).unwrap_or_default();
        self.top_row = 0;
        self.left = 0;
        self.mode = ListMode::Multi;
        self.last_notified = if source.total_count() > 0 {
            Some(Self::global_of(&source, self.cursor))
        } else {
            None
        };
        tracing::debug!(
            sublists = source.sublist_keys().len(),
            items = source.total_count(),
            "multilist source assigned"
        );
        self.source = Some(source);
        self.normalize_viewport();
    }

    /// Drop the source; the view goes blank and navigation no-ops.
    pub fn clear_source(&mut self) {
        self.source = None;
        self.cursor = Cursor::default();
        self.top_row = 0;
        self.left = 0;
        self.mode = ListMode::Multi;
        self.last_notified = None;
    }

    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    /// Horizontal scroll offset.
    pub fn left(&self) -> usize {
        self.left
    }

    /// Top of the viewport (flattened row in multi-list mode, local row in
    /// single-list mode).
    pub fn viewport_top(&self) -> usize {
        self.top_row
    }

    /// Flattened row index of the cursor, or `None` with no data.
    pub fn global_index(&self) -> Option<usize> {
        let source = self.source.as_ref()?;
        if source.total_count() == 0 {
            return None;
        }
        Some(Self::global_of(source, self.cursor))
    }

    /// Tell the view how tall its frame is, so navigation can renormalize
    /// the viewport before the next render.
    pub fn set_frame_height(&mut self, height: u16) {
        self.frame_height = height;
        self.normalize_viewport();
    }

    /// Register a selection-changed listener. Fires whenever a navigation
    /// call lands the cursor on a different global index than the last
    /// notification. Invocation order across listeners is unspecified.
    pub fn on_selection_changed(&mut self, listener: impl FnMut(&SelectionEvent<S::Item>) + 'static) {
        self.selection_listeners.push(Box::new(listener));
    }

    /// Register an item-opened (activation) listener.
    pub fn on_item_opened(&mut self, listener: impl FnMut(&SelectionEvent<S::Item>) + 'static) {
        self.open_listeners.push(Box::new(listener));
    }

    // ========== Navigation ==========

    /// Advance the cursor by one item, crossing into the next non-empty
    /// sublist in multi-list mode, saturating at the active sublist's last
    /// item in single-list mode.
    pub fn move_down(&mut self) {
        let Some(source) = self.source.as_ref() else {
            return;
        };
        if Self::visible_count(source, self.mode) == 0 {
            return;
        }
        let cursor = self.cursor;
        let mut next = cursor;
        if cursor.item + 1 < source.count_at(cursor.sublist) {
            next.item += 1;
        } else if self.mode == ListMode::Multi {
            if let Some(sublist) = Self::next_occupied(source, cursor.sublist) {
                next = Cursor::new(sublist, 0);
            }
        }
        self.commit(next);
    }

    /// Retreat the cursor by one item, crossing into the previous
    /// non-empty sublist's last item in multi-list mode.
    pub fn move_up(&mut self) {
        let Some(source) = self.source.as_ref() else {
            return;
        };
        if Self::visible_count(source, self.mode) == 0 {
            return;
        }
        let cursor = self.cursor;
        let mut next = cursor;
        if cursor.item > 0 {
            next.item -= 1;
        } else if self.mode == ListMode::Multi {
            if let Some(sublist) = Self::prev_occupied(source, cursor.sublist) {
                next = Cursor::new(sublist, source.count_at(sublist) - 1);
            }
        }
        self.commit(next);
    }

    /// Jump to the first item of the next non-empty sublist. Saturates at
    /// the last sublist; in single-list mode only resets to the active
    /// sublist's first item.
    pub fn next_sublist(&mut self) {
        let Some(source) = self.source.as_ref() else {
            return;
        };
        if Self::visible_count(source, self.mode) == 0 {
            return;
        }
        let cursor = self.cursor;
        let next = match self.mode {
            ListMode::Single { sublist } => Cursor::new(sublist, 0),
            ListMode::Multi => match Self::next_occupied(source, cursor.sublist) {
                Some(sublist) => Cursor::new(sublist, 0),
                None => cursor,
            },
        };
        self.commit(next);
    }

    /// Jump to the first item of the current sublist, or of the previous
    /// non-empty sublist when already at item 0. Saturates at the first
    /// sublist.
    pub fn prev_sublist(&mut self) {
        let Some(source) = self.source.as_ref() else {
            return;
        };
        if Self::visible_count(source, self.mode) == 0 {
            return;
        }
        let cursor = self.cursor;
        let next = match self.mode {
            ListMode::Single { sublist } => Cursor::new(sublist, 0),
            ListMode::Multi => {
                if cursor.item > 0 {
                    Cursor::new(cursor.sublist, 0)
                } else {
                    match Self::prev_occupied(source, cursor.sublist) {
                        Some(sublist) => Cursor::new(sublist, 0),
                        None => cursor,
                    }
                }
            }
        };
        self.commit(next);
    }

    /// Jump to the very first visible item.
    pub fn move_home(&mut self) {
        let Some(source) = self.source.as_ref() else {
            return;
        };
        if Self::visible_count(source, self.mode) == 0 {
            return;
        }
        let next = match self.mode {
            ListMode::Single { sublist } => Cursor::new(sublist, 0),
            ListMode::Multi => Self::first_occupied(source).unwrap_or(self.cursor),
        };
        self.commit(next);
    }

    /// Jump to the very last visible item (lands on the last real item,
    /// never one past it).
    pub fn move_end(&mut self) {
        let Some(source) = self.source.as_ref() else {
            return;
        };
        if Self::visible_count(source, self.mode) == 0 {
            return;
        }
        let next = match self.mode {
            ListMode::Single { sublist } => {
                Cursor::new(sublist, source.count_at(sublist).saturating_sub(1))
            }
            ListMode::Multi => Self::last_occupied(source).unwrap_or(self.cursor),
        };
        self.commit(next);
    }

    /// Fire the item-opened event for the item under the cursor. No state
    /// mutation; a no-op with no data or no listeners.
    pub fn open_selected(&mut self) {
        let event = {
            let Some(source) = self.source.as_ref() else {
                return;
            };
            if source.total_count() == 0 {
                return;
            }
            let Some(item) = source.item(self.cursor.sublist, self.cursor.item) else {
                return;
            };
            SelectionEvent {
                global_index: Self::global_of(source, self.cursor),
                cursor: self.cursor,
                item,
            }
        };
        for listener in &mut self.open_listeners {
            listener(&event);
        }
    }

    // ========== Mode switches ==========

    /// Restrict display and navigation to the named sublist. Unknown keys
    /// are a silent no-op. The cursor is forced to the sublist's first
    /// item and the viewport recomputed.
    pub fn single_list_mode(&mut self, key: &str) {
        let Some(source) = self.source.as_ref() else {
            return;
        };
        let Some(sublist) = source.sublist_keys().iter().position(|k| k == key) else {
            return;
        };
        tracing::debug!(key, sublist, "entering single-list mode");
        self.mode = ListMode::Single { sublist };
        self.top_row = 0;
        let next = Cursor::new(sublist, 0);
        if source.count_at(sublist) > 0 {
            self.commit(next);
        } else {
            self.cursor = next;
        }
    }

    /// Return to multi-list display, resetting cursor and viewport to the
    /// top.
    pub fn multi_list_mode(&mut self) {
        let Some(source) = self.source.as_ref() else {
            return;
        };
        tracing::debug!("entering multi-list mode");
        self.mode = ListMode::Multi;
        self.top_row = 0;
        let next = Self::first_occupied(source).unwrap_or_default();
        if source.total_count() > 0 {
            self.commit(next);
        } else {
            self.cursor = next;
        }
    }

    // ========== Horizontal scrolling ==========

    /// Scroll one column left. Cursor untouched.
    pub fn scroll_left(&mut self) {
        self.left = self.left.saturating_sub(1);
    }

    /// Scroll one column right, clamped to the source's widest row.
    pub fn scroll_right(&mut self) {
        let bound = self
            .source
            .as_ref()
            .map(|source| source.max_row_width().max(1))
            .unwrap_or(1);
        self.left = (self.left + 1).min(bound - 1);
    }

    // ========== Rendering ==========

    /// Draw the visible rows into `area`. Header rows show the sublist key
    /// ruled to the frame width; item rows come from the source's
    /// `render_row`; rows past the end stay blank.
    ///
    /// # Panics
    /// Panics on a source whose per-sublist counts do not sum to
    /// `total_count()`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.frame_height = area.height;
        self.normalize_viewport();

        let Some(source) = self.source.as_ref() else {
            frame.render_widget(Paragraph::new(Text::default()), area);
            return;
        };
        Self::check_consistency(source);

        let height = area.height as usize;
        let mut lines: Vec<Line<'static>> = Vec::with_capacity(height);
        match self.mode {
            ListMode::Multi => {
                for row in self.top_row..self.top_row + height {
                    match Self::row_at(source, row) {
                        Some(RowKind::Header(sublist)) => {
                            lines.push(self.header_line(&source.sublist_keys()[sublist], area.width));
                        }
                        Some(RowKind::Item(sublist, item)) => {
                            let selected = self.cursor == Cursor::new(sublist, item);
                            lines.push(source.render_row(sublist, item, selected, area.width, self.left));
                        }
                        None => break,
                    }
                }
            }
            ListMode::Single { sublist } => {
                let count = source.count_at(sublist);
                for row in self.top_row..self.top_row + height {
                    if row == 0 {
                        lines.push(self.header_line(&source.sublist_keys()[sublist], area.width));
                    } else if row <= count {
                        let item = row - 1;
                        let selected = self.cursor == Cursor::new(sublist, item);
                        lines.push(source.render_row(sublist, item, selected, area.width, self.left));
                    } else {
                        break;
                    }
                }
            }
        }

        frame.render_widget(Paragraph::new(Text::from(lines)), area);
    }

    // ========== Internals ==========

    /// Items reachable by the cursor in the given mode. Zero means every
    /// navigation call is a no-op (empty source, or an empty active
    /// sublist in single-list mode).
    fn visible_count(source: &S, mode: ListMode) -> usize {
        match mode {
            ListMode::Multi => source.total_count(),
            ListMode::Single { sublist } => source.count_at(sublist),
        }
    }

    fn commit(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.normalize_viewport();
        self.notify_selection();
    }

    /// Keep the cursor's row inside `[top, top + height)`.
    fn normalize_viewport(&mut self) {
        let Some(source) = self.source.as_ref() else {
            self.top_row = 0;
            return;
        };
        if source.total_count() == 0 {
            self.top_row = 0;
            return;
        }
        let (row, total_rows) = match self.mode {
            ListMode::Multi => (
                Self::global_of(source, self.cursor),
                source.total_count() + source.sublist_keys().len(),
            ),
            ListMode::Single { sublist } => (self.cursor.item + 1, source.count_at(sublist) + 1),
        };
        let height = (self.frame_height as usize).max(1);
        // Never leave blank space at the bottom while rows exist above.
        self.top_row = self.top_row.min(total_rows.saturating_sub(height));
        if row < self.top_row {
            self.top_row = row;
        } else if row >= self.top_row + height {
            self.top_row = row - height + 1;
        }
    }

    fn notify_selection(&mut self) {
        let event = {
            let Some(source) = self.source.as_ref() else {
                return;
            };
            if source.total_count() == 0 {
                return;
            }
            let global = Self::global_of(source, self.cursor);
            if self.last_notified == Some(global) {
                return;
            }
            let Some(item) = source.item(self.cursor.sublist, self.cursor.item) else {
                return;
            };
            SelectionEvent {
                global_index: global,
                cursor: self.cursor,
                item,
            }
        };
        self.last_notified = Some(event.global_index);
        for listener in &mut self.selection_listeners {
            listener(&event);
        }
    }

    /// Flattened row index of a cursor: one header row per sublist up to
    /// and including the cursor's own, plus prior item counts, plus the
    /// item offset.
    fn global_of(source: &S, cursor: Cursor) -> usize {
        let prior: usize = (0..cursor.sublist).map(|s| source.count_at(s)).sum();
        prior + cursor.sublist + 1 + cursor.item
    }

    /// Resolve a flattened row to a header or an item.
    fn row_at(source: &S, row: usize) -> Option<RowKind> {
        let mut base = 0;
        for sublist in 0..source.sublist_keys().len() {
            let count = source.count_at(sublist);
            if row == base {
                return Some(RowKind::Header(sublist));
            }
            if row <= base + count {
                return Some(RowKind::Item(sublist, row - base - 1));
            }
            base += count + 1;
        }
        None
    }

    fn first_occupied(source: &S) -> Option<Cursor> {
        (0..source.sublist_keys().len())
            .find(|&s| source.count_at(s) > 0)
            .map(|s| Cursor::new(s, 0))
    }

    fn last_occupied(source: &S) -> Option<Cursor> {
        (0..source.sublist_keys().len())
            .rev()
            .find(|&s| source.count_at(s) > 0)
            .map(|s| Cursor::new(s, source.count_at(s) - 1))
    }

    fn next_occupied(source: &S, after: usize) -> Option<usize> {
        (after + 1..source.sublist_keys().len()).find(|&s| source.count_at(s) > 0)
    }

    fn prev_occupied(source: &S, before: usize) -> Option<usize> {
        (0..before).rev().find(|&s| source.count_at(s) > 0)
    }

    fn check_consistency(source: &S) {
        let sum: usize = (0..source.sublist_keys().len())
            .map(|s| source.count_at(s))
            .sum();
        let total = source.total_count();
        if sum != total {
            panic!(
                "inconsistent multilist source: per-sublist counts sum to {sum} \
                 but total_count() reports {total}"
            );
        }
    }

    /// Sublist key ruled out to the frame width, with the horizontal
    /// offset already applied.
    fn header_line(&self, key: &str, width: u16) -> Line<'static> {
        let mut text = format!("── {key} ");
        let target = self.left + width as usize;
        while UnicodeWidthStr::width(text.as_str()) < target {
            text.push('─');
        }
        let visible: String = text.chars().skip(self.left).collect();
        Line::from(Span::styled(visible, HEADER_STYLE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixture::FixtureSource;

    fn two_sublists() -> FixtureSource {
        FixtureSource::new(vec![
            ("Installed", vec!["A", "B", "C"]),
            ("Not Installed", vec!["D", "E"]),
        ])
    }

    #[test]
    fn test_global_index_counts_header_rows() {
        let source = two_sublists();
        assert_eq!(MultilistView::global_of(&source, Cursor::new(0, 0)), 1);
        assert_eq!(MultilistView::global_of(&source, Cursor::new(0, 2)), 3);
        assert_eq!(MultilistView::global_of(&source, Cursor::new(1, 0)), 5);
        assert_eq!(MultilistView::global_of(&source, Cursor::new(1, 1)), 6);
    }

    #[test]
    fn test_row_at_resolves_headers_and_items() {
        let source = two_sublists();
        assert_eq!(MultilistView::row_at(&source, 0), Some(RowKind::Header(0)));
        assert_eq!(MultilistView::row_at(&source, 1), Some(RowKind::Item(0, 0)));
        assert_eq!(MultilistView::row_at(&source, 3), Some(RowKind::Item(0, 2)));
        assert_eq!(MultilistView::row_at(&source, 4), Some(RowKind::Header(1)));
        assert_eq!(MultilistView::row_at(&source, 6), Some(RowKind::Item(1, 1)));
        assert_eq!(MultilistView::row_at(&source, 7), None);
    }

    #[test]
    fn test_row_at_skips_nothing_for_empty_sublist() {
        let source = FixtureSource::new(vec![
            ("Empty", vec![]),
            ("Full", vec!["A"]),
        ]);
        assert_eq!(MultilistView::row_at(&source, 0), Some(RowKind::Header(0)));
        assert_eq!(MultilistView::row_at(&source, 1), Some(RowKind::Header(1)));
        assert_eq!(MultilistView::row_at(&source, 2), Some(RowKind::Item(1, 0)));
    }

    #[test]
    fn test_set_source_snaps_past_empty_first_sublist() {
        let mut view = MultilistView::new();
        view.set_source(FixtureSource::new(vec![
            ("Empty", vec![]),
            ("Full", vec!["A", "B"]),
        ]));
        assert_eq!(view.cursor(), Cursor::new(1, 0));
    }

    fn wide_titles() -> FixtureSource {
        FixtureSource::new(vec![(
            "Steam",
            vec!["Half-Life 2", "Portal", "Baldur's Gate 3"],
        )])
    }

    #[test]
    fn test_horizontal_scroll_clamps_to_widest_row() {
        let mut view = MultilistView::new();
        view.set_source(wide_titles());
        let bound = view.source().unwrap().max_row_width();
        assert_eq!(bound, "Baldur's Gate 3".len());
        for _ in 0..bound + 10 {
            view.scroll_right();
        }
        assert_eq!(view.left(), bound - 1);
        view.scroll_left();
        assert_eq!(view.left(), bound - 2);
        for _ in 0..bound + 10 {
            view.scroll_left();
        }
        assert_eq!(view.left(), 0);
    }

    #[test]
    fn test_scroll_without_source_stays_at_zero() {
        let mut view: MultilistView<FixtureSource> = MultilistView::new();
        view.scroll_right();
        assert_eq!(view.left(), 0);
    }

    #[test]
    #[should_panic(expected = "inconsistent multilist source")]
    fn test_inconsistent_source_panics_on_assignment() {
        let mut view = MultilistView::new();
        view.set_source(FixtureSource::with_bogus_total(
            vec![("Installed", vec!["A"])],
            7,
        ));
    }

    #[test]
    fn test_header_line_applies_horizontal_offset() {
        let mut view = MultilistView::new();
        view.set_source(wide_titles());
        let full = view.header_line("Steam", 12);
        assert_eq!(full.spans[0].content.as_ref(), "── Steam ───");
        view.scroll_right();
        view.scroll_right();
        let shifted = view.header_line("Steam", 12);
        assert!(shifted.spans[0].content.as_ref().starts_with(" Steam"));
    }
}
