//! Bounded snapshot history for undo/redo.
//!
//! Keeps whole-value snapshots on two stacks. Both stacks are capped at the
//! same depth; pushing past the cap evicts the oldest entry.

use std::collections::VecDeque;

/// Default maximum number of snapshots per stack
pub const DEFAULT_HISTORY_DEPTH: usize = 10;

/// Manages undo/redo stacks of snapshots
#[derive(Debug, Clone)]
pub struct UndoRedoManager<T> {
    /// Oldest at the front, most recent at the back
    past: VecDeque<T>,
    /// Next redo target at the front
    future: VecDeque<T>,
    max_depth: usize,
}

impl<T> UndoRedoManager<T> {
    /// Create a manager with the default depth
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_HISTORY_DEPTH)
    }

    /// Create with a custom maximum depth
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            past: VecDeque::with_capacity(max_depth),
            future: VecDeque::with_capacity(max_depth),
            max_depth,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Record the state that existed before a new edit.
    ///
    /// Clears the redo stack.
    pub fn record(&mut self, previous: T) {
        self.future.clear();
        self.push_past(previous);
    }

    fn push_past(&mut self, snapshot: T) {
        self.past.push_back(snapshot);
        while self.past.len() > self.max_depth {
            self.past.pop_front();
        }
    }

    fn push_future(&mut self, snapshot: T) {
        self.future.push_front(snapshot);
        self.future.truncate(self.max_depth);
    }

    /// Step back: `current` is replaced by the latest past snapshot and the
    /// replaced value becomes the next redo target. Returns false when there
    /// is nothing to undo.
    pub fn undo(&mut self, current: &mut T) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let replaced = std::mem::replace(current, previous);
        self.push_future(replaced);
        true
    }

    /// Step forward, the mirror of [`undo`](Self::undo).
    pub fn redo(&mut self, current: &mut T) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let replaced = std::mem::replace(current, next);
        self.push_past(replaced);
        true
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undo steps available
    pub fn undo_count(&self) -> usize {
        self.past.len()
    }

    /// Number of redo steps available
    pub fn redo_count(&self) -> usize {
        self.future.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl<T> Default for UndoRedoManager<T> {
    fn default() -> Self {
        Self::new()
    }
}
