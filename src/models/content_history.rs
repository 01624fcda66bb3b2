//! Content history (linear undo model).
//!
//! Snapshots live in an arena indexed by a cursor:
//! - `entries[cursor]` is the live snapshot
//! - push after undo drops every entry past the cursor
//! - undo/redo only move the cursor

use super::snapshot::Snapshot;

#[derive(Clone, Debug)]
pub struct HistoryLog {
    entries: Vec<Snapshot>,
    cursor: usize,
}

impl HistoryLog {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Records a new snapshot, discarding the redo branch.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;
    }

    pub fn undo(&mut self) -> &Snapshot {
        if self.can_undo() {
            self.cursor -= 1;
        }
        self.current()
    }

    pub fn redo(&mut self) -> &Snapshot {
        if self.can_redo() {
            self.cursor += 1;
        }
        self.current()
    }

    pub fn current(&self) -> &Snapshot {
        &self.entries[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/content_history.rs"]
mod tests;
