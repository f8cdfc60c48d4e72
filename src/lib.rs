//! # Tavla Core
//!
//! Core board state, undo history, and persistence for Tavla kanban boards.
//!
//! This crate provides the fundamental types and operations for a
//! single-user board (ordered columns of ordered tasks, inline title
//! editing, drag-and-drop moves, linear undo/redo, and a single persisted
//! slot) without any dependency on a specific UI implementation.

pub mod domain;
pub mod error;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::{Board, Column, ColumnId, Task, TaskId},
    drag::DragPayload,
    filter::filter_board,
};
pub use error::{Result, TavlaError};
pub use storage::Storage;
pub use store::{history::History, BoardStore};
