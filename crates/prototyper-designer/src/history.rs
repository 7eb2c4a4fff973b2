//! Linear undo/redo stack.
//!
//! Pushing a new command discards the redo side. The stack never applies a
//! command on push itself; it calls [`RecordedCommand::redo`], which is inert
//! until the command has been undone once.

use crate::commands::RecordedCommand;
use crate::document::Document;

/// Number of entries kept when no limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug)]
pub struct UndoStack {
    undo_stack: Vec<RecordedCommand>,
    redo_stack: Vec<RecordedCommand>,
    limit: usize,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl UndoStack {
    /// Creates an empty stack holding at most `limit` undo entries.
    pub fn new(limit: usize) -> Self {
        debug_assert!(limit > 0, "history limit must be positive");
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Pushes a command whose edit has already been performed.
    pub fn push(&mut self, mut cmd: RecordedCommand, doc: &mut Document) {
        cmd.redo(doc);
        tracing::debug!("Recorded {}", cmd.label());
        self.undo_stack.push(cmd);
        self.redo_stack.clear();
        if self.undo_stack.len() > self.limit {
            self.undo_stack.remove(0);
        }
    }

    /// Undoes the most recent command. Returns `false` when there is none.
    pub fn undo(&mut self, doc: &mut Document) -> bool {
        match self.undo_stack.pop() {
            Some(mut cmd) => {
                cmd.undo(doc);
                self.redo_stack.push(cmd);
                true
            }
            None => false,
        }
    }

    /// Redoes the most recently undone command. Returns `false` when there is none.
    pub fn redo(&mut self, doc: &mut Document) -> bool {
        match self.redo_stack.pop() {
            Some(mut cmd) => {
                cmd.redo(doc);
                self.undo_stack.push(cmd);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Menu text for the next undo, e.g. "Undo Change Pen".
    pub fn undo_text(&self) -> Option<String> {
        self.undo_stack
            .last()
            .map(|cmd| format!("Undo {}", cmd.label()))
    }

    pub fn redo_text(&self) -> Option<String> {
        self.redo_stack
            .last()
            .map(|cmd| format!("Redo {}", cmd.label()))
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drops all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
