//! Whole-line selection state.

/// Line-granular selection.
///
/// Only whole lines are ever selected; cut/copy/paste operate on line blocks. `start_line` is the
/// anchor, `end_line` follows the caret while the selection is extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineSelection {
    /// Anchor line.
    pub start_line: usize,
    /// Line the selection was last extended to.
    pub end_line: usize,
    /// Whether a selection currently exists.
    pub active: bool,
    /// Whether the user is extending the selection with a drag gesture.
    pub dragging: bool,
}

impl LineSelection {
    /// Anchor a new selection on `line`.
    pub fn start(&mut self, line: usize) {
        self.start_line = line;
        self.end_line = line;
        self.active = true;
    }

    /// Move the extending end to `line` (no-op without an active selection).
    pub fn extend_to(&mut self, line: usize) {
        if self.active {
            self.end_line = line;
        }
    }

    /// Drop the selection and any drag in progress.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Inclusive `(first, last)` line range, if active.
    pub fn line_range(&self) -> Option<(usize, usize)> {
        self.active.then(|| {
            (
                self.start_line.min(self.end_line),
                self.start_line.max(self.end_line),
            )
        })
    }

    /// Whether `line` is inside the active selection.
    pub fn contains_line(&self, line: usize) -> bool {
        self.line_range()
            .is_some_and(|(first, last)| first <= line && line <= last)
    }

    /// Clamp both ends below `line_count`.
    pub(crate) fn clamp(&mut self, line_count: usize) {
        let last = line_count.saturating_sub(1);
        self.start_line = self.start_line.min(last);
        self.end_line = self.end_line.min(last);
    }
}
