//! Undo/redo for designer state.

use super::DesignerState;

impl DesignerState {
    /// Restores the previous document. The snapshot keeps its own price.
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(current) = self.document.as_mut() else {
            return false;
        };
        if !self.history.undo(current) {
            return false;
        }
        tracing::info!("Undo ({} left)", self.history.undo_count());
        self.prune_selection();
        true
    }

    /// Re-applies the most recently undone edit.
    pub fn redo(&mut self) -> bool {
        let Some(current) = self.document.as_mut() else {
            return false;
        };
        if !self.history.redo(current) {
            return false;
        }
        tracing::info!("Redo ({} left)", self.history.redo_count());
        self.prune_selection();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_count(&self) -> usize {
        self.history.undo_count()
    }

    pub fn redo_count(&self) -> usize {
        self.history.redo_count()
    }
}
