//! # Edit History
//!
//! Linear undo/redo over full [`Document`] snapshots.
//!
//! ```text
//!  snapshots:  [ s0 | s1 | s2 | s3 ]
//!                          ^ cursor
//!  record(s4) drops s3, appends s4, cursor -> s4
//! ```
//!
//! Documents are small (tens of elements), so every entry is a complete
//! copy rather than a diff. Undo/redo is then just cursor movement.

use crate::document::Document;

/// Snapshot history with a cursor. Invariant: `cursor < snapshots.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    snapshots: Vec<Document>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

impl History {
    /// Start a history whose first (oldest) snapshot is `initial`.
    pub fn new(initial: Document) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &Document {
        &self.snapshots[self.cursor]
    }

    /// Record a new snapshot, discarding any redo branch past the cursor.
    pub fn record(&mut self, snapshot: Document) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Replace the snapshot at the cursor without adding an entry.
    ///
    /// Any redo branch is discarded as well, since the amended state is a
    /// new edit.
    pub fn amend(&mut self, snapshot: Document) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots[self.cursor] = snapshot;
    }

    /// The snapshot an undo would return to, if any.
    pub fn previous(&self) -> Option<&Document> {
        self.cursor.checked_sub(1).map(|i| &self.snapshots[i])
    }

    /// Drop the snapshot at the cursor and everything after it.
    ///
    /// The initial snapshot is never dropped.
    pub fn discard(&mut self) {
        if self.cursor > 0 {
            self.snapshots.truncate(self.cursor);
            self.cursor -= 1;
        }
    }

    /// Step back. At the oldest snapshot this is a no-op.
    pub fn undo(&mut self) -> &Document {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Step forward. At the newest snapshot this is a no-op.
    pub fn redo(&mut self) -> &Document {
        if self.cursor + 1 < self.snapshots.len() {
            self.cursor += 1;
        }
        self.current()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least its initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
