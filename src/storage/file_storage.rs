use crate::{domain::Board, error::Result, storage::Storage};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

/// File-based storage: one JSON slot file under a `.tavla` directory.
///
/// The slot holds the bare array of column objects, so the file is
/// interchangeable with board data saved by any other backend.
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const TAVLA_DIR: &'static str = ".tavla";
    const BOARD_FILE: &'static str = "board.json";

    /// Creates a new FileStorage instance rooted at the given directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root_path: root.as_ref().join(Self::TAVLA_DIR),
        }
    }

    fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    async fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn load_board(&self) -> Result<Board> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Ok(Board::new());
        }

        let contents = fs::read_to_string(&board_file).await?;
        match serde_json::from_str(&contents) {
            Ok(board) => Ok(board),
            Err(error) => {
                warn!(
                    file = %board_file.display(),
                    %error,
                    "Stored board does not parse, starting empty"
                );
                Ok(Board::new())
            }
        }
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        self.ensure_directory_exists().await?;

        let json = serde_json::to_string_pretty(board)?;
        fs::write(self.board_file(), json).await?;

        Ok(())
    }
}
