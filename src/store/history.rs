use crate::domain::Board;

/// Linear undo/redo over whole-board snapshots.
///
/// Snapshots are plain clones. `Board` owns all of its data, so a clone is a
/// full structural copy sharing no mutable state with the live board, so a
/// stored snapshot can never be corrupted by later edits. Both stacks are
/// unbounded.
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<Board>,
    redo: Vec<Board>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a pre-mutation snapshot and invalidates the redo stack.
    ///
    /// `snapshot` must be the board state captured before the mutation this
    /// entry is meant to allow undoing.
    pub fn record(&mut self, snapshot: Board) {
        self.undo.push(snapshot);
        self.redo.clear();
    }

    /// Pops the most recent snapshot, saving `current` for redo.
    ///
    /// Returns the board to restore, or `None` when there is nothing to
    /// undo.
    pub fn undo(&mut self, current: &Board) -> Option<Board> {
        let snapshot = self.undo.pop()?;
        self.redo.push(current.clone());
        Some(snapshot)
    }

    /// Reverses the most recent undo, saving `current` back onto the undo
    /// stack. Returns `None` when there is nothing to redo.
    pub fn redo(&mut self, current: &Board) -> Option<Board> {
        let snapshot = self.redo.pop()?;
        self.undo.push(current.clone());
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
