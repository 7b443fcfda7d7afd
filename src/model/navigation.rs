//! Navigation Stack
//!
//! A column's private back/forward history. Works like browser session
//! history: pushing from a mid-history position drops the abandoned
//! forward branch.
//!
//! Every operation returns a new stack and leaves the receiver untouched,
//! so a snapshot handed to the renderer never changes underneath it.

use super::types::ViewEntry;

/// Per-column history of visited views with a cursor
///
/// Invariants: `entries` is never empty and `cursor < entries.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationStack {
    entries: Vec<ViewEntry>,
    cursor: usize,
}

impl NavigationStack {
    /// Create a stack holding only the seed entry
    pub fn new(seed: ViewEntry) -> Self {
        Self {
            entries: vec![seed],
            cursor: 0,
        }
    }

    /// Entry the column is currently showing
    pub fn current(&self) -> &ViewEntry {
        &self.entries[self.cursor]
    }

    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Push a new entry after the cursor, discarding forward history
    pub fn push(&self, entry: ViewEntry) -> Self {
        let mut entries = self.entries[..=self.cursor].to_vec();
        entries.push(entry);
        let cursor = entries.len() - 1;
        Self { entries, cursor }
    }

    /// Step back one entry (no-op at the first entry)
    pub fn back(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            cursor: self.cursor.saturating_sub(1),
        }
    }

    /// Step forward one entry (no-op at the last entry)
    pub fn forward(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            cursor: (self.cursor + 1).min(self.entries.len() - 1),
        }
    }
}
