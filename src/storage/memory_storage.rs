use crate::{domain::Board, error::Result, storage::Storage};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

/// In-memory storage: the slot is one serialized string.
///
/// Behaves exactly like the file backend's keyed slot without touching
/// disk. Clones share the same slot, so a test can hand a clone to a store
/// and still observe what the store writes.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    /// Creates storage with an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage whose slot already holds the given serialized value
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }

    /// The raw slot contents, if any
    pub async fn contents(&self) -> Option<String> {
        self.slot.lock().await.clone()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load_board(&self) -> Result<Board> {
        let slot = self.slot.lock().await;
        match slot.as_deref() {
            None => Ok(Board::new()),
            Some(contents) => match serde_json::from_str(contents) {
                Ok(board) => Ok(board),
                Err(error) => {
                    warn!(%error, "Stored board does not parse, starting empty");
                    Ok(Board::new())
                }
            },
        }
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        let json = serde_json::to_string(board)?;
        *self.slot.lock().await = Some(json);
        Ok(())
    }
}
