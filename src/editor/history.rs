//! Edit history
//!
//! A plain undo stack of tile edits, most recent last. No redo, no size
//! cap; capping is the caller's policy if it ever wants one.

use crate::board::Block;

/// One recorded tile edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEntry {
    pub index: usize,
    pub old: Block,
    pub new: Block,
}

/// Ordered edit record, oldest first
#[derive(Default)]
pub struct EditHistory {
    entries: Vec<EditEntry>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn record(&mut self, entry: EditEntry) {
        self.entries.push(entry);
    }

    /// Remove and return the most recent entry
    pub fn pop_last(&mut self) -> Option<EditEntry> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop everything. Used when the board is replaced wholesale and old
    /// indices no longer describe it.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
