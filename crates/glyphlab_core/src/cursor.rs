//! Selection cursor for sequential symbol browsing.
//!
//! # Responsibility
//! - Track the "current symbol" index over the ordered id list.
//! - Keep the index valid when the list shrinks underneath it.
//!
//! # Invariants
//! - `current()` is always `< count` after any call that received `count`.
//! - `next`/`prev` wrap around modulo the item count.
//! - Every operation on an empty cursor is a no-op (except `select`).
//!
//! The cursor does not cache the item count: the id list lives in the
//! store and can change between calls, so the count is passed in.

/// Wraparound browse cursor over an external ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionCursor {
    position: Option<usize>,
}

impl SelectionCursor {
    /// Creates an empty cursor (nothing selected).
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected index, or `None` when nothing is selected.
    pub fn current(&self) -> Option<usize> {
        self.position
    }

    /// Selects `index` directly, clamped into `[0, count)`.
    ///
    /// Selecting into an empty list clears the selection.
    pub fn select(&mut self, index: usize, count: usize) {
        self.position = if count == 0 {
            None
        } else {
            Some(index.min(count - 1))
        };
    }

    /// Advances to the next item, wrapping past the end.
    pub fn next(&mut self, count: usize) {
        self.step(count, 1);
    }

    /// Retreats to the previous item, wrapping past the start.
    pub fn prev(&mut self, count: usize) {
        // `count - 1` steps forward equals one step back under wraparound.
        self.step(count, count.saturating_sub(1));
    }

    fn step(&mut self, count: usize, delta: usize) {
        if count == 0 {
            self.position = None;
            return;
        }
        if let Some(index) = self.position {
            self.position = Some((index % count + delta) % count);
        }
    }

    /// Re-clamps after an item was removed anywhere in the list.
    ///
    /// `index := index % new_count`, or empty when the list emptied. This
    /// keeps deleting the last item landing the cursor back on the first.
    pub fn clamp_after_removal(&mut self, new_count: usize) {
        self.position = match self.position {
            Some(index) if new_count > 0 => Some(index % new_count),
            _ => None,
        };
    }
}
