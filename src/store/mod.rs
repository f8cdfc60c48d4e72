use crate::{
    domain::{filter_board, Board, ColumnId, DragPayload, TaskId},
    error::Result,
    storage::Storage,
};
use tracing::{debug, warn};

pub mod history;

use history::History;

/// The single owned store behind a board UI.
///
/// Holds the live board, the undo/redo history, and the persistence backend.
/// Each mutation runs to completion before the next one starts (the caller
/// drives it from a single event loop): the pre-mutation snapshot is
/// recorded, the board changes, and the new state is written to the slot.
/// Unknown column or task ids never surface as errors; they degrade to
/// silent no-ops that leave board, history, and storage untouched.
pub struct BoardStore {
    board: Board,
    history: History,
    storage: Box<dyn Storage>,
}

impl BoardStore {
    /// Hydrates a store from the persisted slot.
    ///
    /// An absent or unreadable slot yields an empty board; only a storage
    /// I/O failure is an error. History always starts empty.
    pub async fn load(storage: Box<dyn Storage>) -> Result<Self> {
        let board = storage.load_board().await?;
        Ok(Self {
            board,
            history: History::new(),
            storage,
        })
    }

    /// The live board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Search projection of the live board; display-only
    pub fn filtered(&self, term: &str) -> Board {
        filter_board(&self.board, term)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Appends a new empty column and returns its id
    pub async fn add_column(&mut self) -> Result<ColumnId> {
        let before = self.board.clone();
        let id = self.board.add_column();
        self.commit(before).await?;
        Ok(id)
    }

    /// Deletes a column and all of its tasks
    pub async fn delete_column(&mut self, id: &ColumnId) -> Result<()> {
        let before = self.board.clone();
        if self.board.remove_column(id) {
            self.commit(before).await?;
        } else {
            debug!(column = %id, "delete_column: unknown column, ignoring");
        }
        Ok(())
    }

    /// Appends a new task to the named column.
    ///
    /// Returns the new task's id, or `None` if the column is unknown.
    pub async fn add_task(&mut self, column_id: &ColumnId) -> Result<Option<TaskId>> {
        let before = self.board.clone();
        match self.board.add_task(column_id) {
            Some(task_id) => {
                self.commit(before).await?;
                Ok(Some(task_id))
            }
            None => {
                debug!(column = %column_id, "add_task: unknown column, ignoring");
                Ok(None)
            }
        }
    }

    /// Replaces a column title. Any string is accepted, including empty.
    pub async fn update_column_title(&mut self, id: &ColumnId, title: String) -> Result<()> {
        let before = self.board.clone();
        if self.board.set_column_title(id, title) {
            self.commit(before).await?;
        } else {
            debug!(column = %id, "update_column_title: unknown column, ignoring");
        }
        Ok(())
    }

    /// Replaces a task title within the named column
    pub async fn update_task_title(
        &mut self,
        column_id: &ColumnId,
        task_id: &TaskId,
        title: String,
    ) -> Result<()> {
        let before = self.board.clone();
        if self.board.set_task_title(column_id, task_id, title) {
            self.commit(before).await?;
        } else {
            debug!(
                column = %column_id,
                task = %task_id,
                "update_task_title: unknown column or task, ignoring"
            );
        }
        Ok(())
    }

    /// Moves a task to the end of the target column.
    ///
    /// Dropping a task onto its own column is a true no-op: no snapshot is
    /// recorded and nothing is persisted. Unknown ids likewise leave
    /// everything untouched.
    pub async fn move_task(
        &mut self,
        source: &ColumnId,
        target: &ColumnId,
        task_id: &TaskId,
    ) -> Result<()> {
        if source == target {
            return Ok(());
        }
        let before = self.board.clone();
        if self.board.move_task(source, target, task_id) {
            self.commit(before).await?;
        } else {
            debug!(
                source = %source,
                target = %target,
                task = %task_id,
                "move_task: unknown column or task, ignoring"
            );
        }
        Ok(())
    }

    /// Completes a drag gesture from an encoded payload.
    ///
    /// A payload that does not decode is dropped without touching the board.
    pub async fn apply_drop(&mut self, raw_payload: &str, target: &ColumnId) -> Result<()> {
        match DragPayload::decode(raw_payload) {
            Some(payload) => {
                self.move_task(&payload.column_id, target, &payload.task_id)
                    .await
            }
            None => {
                warn!(target = %target, "apply_drop: malformed drag payload, ignoring");
                Ok(())
            }
        }
    }

    /// Restores the board to the state before the latest recorded mutation.
    ///
    /// A no-op when the undo stack is empty. The restored state is persisted.
    pub async fn undo(&mut self) -> Result<()> {
        if let Some(snapshot) = self.history.undo(&self.board) {
            self.board = snapshot;
            self.persist().await?;
        }
        Ok(())
    }

    /// Reverses the latest undo.
    ///
    /// A no-op when the redo stack is empty. The restored state is persisted.
    pub async fn redo(&mut self) -> Result<()> {
        if let Some(snapshot) = self.history.redo(&self.board) {
            self.board = snapshot;
            self.persist().await?;
        }
        Ok(())
    }

    /// Records the pre-mutation snapshot and persists the mutated board.
    ///
    /// Only called once a mutation has actually changed the board; no-ops
    /// never reach the history or the slot.
    async fn commit(&mut self, before: Board) -> Result<()> {
        self.history.record(before);
        self.persist().await
    }

    async fn persist(&self) -> Result<()> {
        self.storage.save_board(&self.board).await
    }
}
