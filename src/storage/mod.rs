use crate::{domain::Board, error::Result};
use async_trait::async_trait;

pub mod memory_storage;

#[cfg(feature = "file-storage")]
pub mod file_storage;

/// Storage trait for the single persisted board slot.
///
/// There is exactly one slot, written whole on every change and read whole
/// at startup. The single-threaded event model guarantees the slot is never
/// accessed concurrently.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Loads the board from the slot.
    ///
    /// An absent slot, and a slot whose contents no longer parse as a
    /// board, both hydrate as an empty board; bad data must never fail the
    /// load. Only real I/O failures are errors.
    async fn load_board(&self) -> Result<Board>;

    /// Serializes the board and overwrites the slot
    async fn save_board(&self, board: &Board) -> Result<()>;
}
