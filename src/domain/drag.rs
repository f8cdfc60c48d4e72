use crate::domain::board::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Identity of a dragged task: the task and the column it is leaving.
///
/// The payload lives only for the duration of one drag gesture: encoded
/// when the drag starts, decoded exactly once at drop time, then discarded.
/// It never carries board state, only identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    pub column_id: ColumnId,
    pub task_id: TaskId,
}

impl DragPayload {
    pub fn new(column_id: ColumnId, task_id: TaskId) -> Self {
        Self { column_id, task_id }
    }

    /// Encodes the payload for a string-valued drag interface
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decodes a payload produced by [`encode`](Self::encode).
    ///
    /// Malformed input yields `None`; the drop is ignored rather than
    /// touching the board.
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}
