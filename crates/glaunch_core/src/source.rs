//! Data-source seam for the multilist view.
//!
//! The view reads everything through [`MultilistSource`] and owns no item
//! data itself. Sources hand out cheap opaque handles (`Item`) and render
//! one row at a time; the view owns headers, highlighting, and placement.

use ratatui::text::Line;

/// The (sublist, item) pair identifying the highlighted item.
///
/// Whenever the visible item count is non-zero, the cursor is valid:
/// `sublist` indexes into the source's key order and `item` is within that
/// sublist's count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Index into `sublist_keys()`.
    pub sublist: usize,
    /// Item offset within the sublist.
    pub item: usize,
}

impl Cursor {
    pub fn new(sublist: usize, item: usize) -> Self {
        Self { sublist, item }
    }
}

/// Payload handed to selection-changed and item-opened listeners.
#[derive(Debug, Clone)]
pub struct SelectionEvent<T> {
    /// Flattened row index of the cursor, counting one header row per
    /// sublist (see [`MultilistSource`] docs for the exact accounting).
    pub global_index: usize,
    /// Cursor position the event was observed at.
    pub cursor: Cursor,
    /// Handle of the item under the cursor.
    pub item: T,
}

/// Read-only view over a keyed collection of sublists.
///
/// Key order is insertion order and must be stable for the lifetime of a
/// given source instance; owners swap in a new instance instead of mutating
/// the key order live.
///
/// The flattened row sequence the view navigates is: for each sublist in
/// key order, one virtual header row followed by that sublist's items. The
/// global index of item `(s, i)` is therefore
/// `sum of counts before s + (s + 1) + i`.
pub trait MultilistSource {
    /// Opaque item handle reported through selection events. Expected to be
    /// cheap (an id, not the full record).
    type Item;

    /// Sublist keys in stable insertion order.
    fn sublist_keys(&self) -> &[String];

    /// Item count for a key. Unknown keys report 0, never an error.
    fn count_by_key(&self, key: &str) -> usize;

    /// Item count for a positional sublist index. 0 past the end.
    fn count_at(&self, index: usize) -> usize {
        self.sublist_keys()
            .get(index)
            .map(|key| self.count_by_key(key))
            .unwrap_or(0)
    }

    /// Total item count across all sublists.
    ///
    /// Must equal the sum of the per-sublist counts; the view fails fast on
    /// sources that violate this.
    fn total_count(&self) -> usize {
        (0..self.sublist_keys().len())
            .map(|index| self.count_at(index))
            .sum()
    }

    /// Look up the handle at `(sublist, index)`, if present.
    fn item(&self, sublist: usize, index: usize) -> Option<Self::Item>;

    /// Width of the widest rendered row, used as the horizontal scroll
    /// bound.
    fn max_row_width(&self) -> usize;

    /// Render one item row. `left` is the horizontal scroll offset already
    /// applied to header rows by the view; sources should skip that many
    /// leading columns so item rows stay aligned with their headers.
    fn render_row(
        &self,
        sublist: usize,
        index: usize,
        selected: bool,
        width: u16,
        left: usize,
    ) -> Line<'static>;
}
