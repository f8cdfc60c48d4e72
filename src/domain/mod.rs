pub mod board;
pub mod drag;
pub mod filter;

pub use board::{Board, Column, ColumnId, Task, TaskId};
pub use drag::DragPayload;
pub use filter::filter_board;
