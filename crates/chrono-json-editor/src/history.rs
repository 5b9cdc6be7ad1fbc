//! Snapshot-based undo/redo.
//!
//! Each history entry is a full copy of the buffer. Documents edited here are hand-maintained
//! configuration files, so whole-buffer snapshots keep undo trivially correct.
//!
//! The bottom of the undo stack is the session's initial state and is never undone past.

/// Undo/redo stacks of buffer snapshots.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
    max_depth: usize,
    /// Snapshot the host last saved, for dirty tracking.
    clean: Option<String>,
}

impl UndoHistory {
    /// Start a history whose initial (never undone) state is `initial`.
    ///
    /// `max_depth` bounds the number of undo snapshots kept (at least one is always kept).
    pub fn new(initial: impl Into<String>, max_depth: usize) -> Self {
        let initial = initial.into();
        Self {
            clean: Some(initial.clone()),
            undo_stack: vec![initial],
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Record `buffer` as the newest state.
    ///
    /// Returns `false` (and changes nothing) when `buffer` equals the current top. A recorded push
    /// discards the redo stack.
    pub fn push(&mut self, buffer: &str) -> bool {
        if self.current() == Some(buffer) {
            return false;
        }

        self.redo_stack.clear();
        self.undo_stack.push(buffer.to_string());

        if self.undo_stack.len() > self.max_depth {
            let excess = self.undo_stack.len() - self.max_depth;
            self.undo_stack.drain(..excess);
        }
        true
    }

    /// Step back one snapshot, returning the buffer to restore.
    pub fn undo(&mut self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        let top = self.undo_stack.pop()?;
        self.redo_stack.push(top);
        self.current()
    }

    /// Step forward one snapshot, returning the buffer to restore.
    pub fn redo(&mut self) -> Option<&str> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(next);
        self.current()
    }

    /// The snapshot matching the current buffer.
    pub fn current(&self) -> Option<&str> {
        self.undo_stack.last().map(String::as_str)
    }

    /// Whether [`UndoHistory::undo`] would do anything.
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() >= 2
    }

    /// Whether [`UndoHistory::redo`] would do anything.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undo snapshots, including the initial state.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of redo snapshots.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Mark the current state as saved.
    pub fn mark_clean(&mut self) {
        self.clean = self.current().map(str::to_string);
    }

    /// Whether the current state matches the last saved state.
    pub fn is_clean(&self) -> bool {
        self.clean.as_deref() == self.current()
    }
}
