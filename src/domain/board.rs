use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnId(String);

impl ColumnId {
    /// Generates a fresh unique id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Unique identifier for a task
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh unique id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A single unit of work, belonging to exactly one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
}

impl Task {
    /// Title given to freshly created tasks
    pub const DEFAULT_TITLE: &'static str = "New Task";

    /// Creates a task with a fresh id and the default title
    pub fn new() -> Self {
        Self {
            id: TaskId::generate(),
            title: Self::DEFAULT_TITLE.to_string(),
        }
    }

    /// Creates a task with a fresh id and the given title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            title: title.into(),
        }
    }
}

impl Default for Task {
    fn default() -> Self {
        Self::new()
    }
}

/// A named, ordered bucket of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    /// Title given to freshly created columns
    pub const DEFAULT_TITLE: &'static str = "New Column";

    /// Creates an empty column with a fresh id and the default title
    pub fn new() -> Self {
        Self {
            id: ColumnId::generate(),
            title: Self::DEFAULT_TITLE.to_string(),
            tasks: Vec::new(),
        }
    }

    /// Creates an empty column with a fresh id and the given title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::generate(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| &task.id == id)
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

/// The board: an ordered sequence of columns, left to right.
///
/// The board is the root aggregate; columns and tasks are owned exclusively
/// by it. It serializes as a bare JSON array of columns so data saved by any
/// earlier build of the app hydrates unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from an existing sequence of columns
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by id
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| &column.id == id)
    }

    pub fn contains_column(&self, id: &ColumnId) -> bool {
        self.column(id).is_some()
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|column| column.tasks.len()).sum()
    }

    fn column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| &column.id == id)
    }

    fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| &column.id == id)
    }

    /// Appends a new empty column and returns its id
    pub fn add_column(&mut self) -> ColumnId {
        let column = Column::new();
        let id = column.id.clone();
        self.columns.push(column);
        id
    }

    /// Removes a column and all of its tasks.
    ///
    /// Returns whether the board changed; an unknown id changes nothing.
    pub fn remove_column(&mut self, id: &ColumnId) -> bool {
        match self.column_index(id) {
            Some(index) => {
                self.columns.remove(index);
                true
            }
            None => false,
        }
    }

    /// Appends a new task to the named column and returns its id.
    ///
    /// Returns `None` without changing the board if the column is unknown.
    pub fn add_task(&mut self, column_id: &ColumnId) -> Option<TaskId> {
        let column = self.column_mut(column_id)?;
        let task = Task::new();
        let id = task.id.clone();
        column.tasks.push(task);
        Some(id)
    }

    /// Replaces a column title. Any string is accepted, including empty.
    ///
    /// Returns whether the column was found.
    pub fn set_column_title(&mut self, id: &ColumnId, title: String) -> bool {
        match self.column_mut(id) {
            Some(column) => {
                column.title = title;
                true
            }
            None => false,
        }
    }

    /// Replaces a task title within the named column.
    ///
    /// Returns whether both column and task were found.
    pub fn set_task_title(&mut self, column_id: &ColumnId, task_id: &TaskId, title: String) -> bool {
        let task = self
            .column_mut(column_id)
            .and_then(|column| column.tasks.iter_mut().find(|task| &task.id == task_id));
        match task {
            Some(task) => {
                task.title = title;
                true
            }
            None => false,
        }
    }

    /// Moves a task from the source column to the end of the target column.
    ///
    /// The task always lands last in the target; there is no index-based
    /// insertion. A move onto the task's own column leaves the board
    /// untouched, as does any unknown column or task id. Returns whether the
    /// board changed.
    pub fn move_task(&mut self, source: &ColumnId, target: &ColumnId, task_id: &TaskId) -> bool {
        if source == target {
            return false;
        }
        self.transfer_task(source, target, task_id).is_some()
    }

    fn transfer_task(
        &mut self,
        source: &ColumnId,
        target: &ColumnId,
        task_id: &TaskId,
    ) -> Option<()> {
        let source_index = self.column_index(source)?;
        let target_index = self.column_index(target)?;
        let task_index = self.columns[source_index].task_index(task_id)?;

        let task = self.columns[source_index].tasks.remove(task_index);
        self.columns[target_index].tasks.push(task);
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> (Board, ColumnId, ColumnId, TaskId) {
        let mut board = Board::new();
        let todo = board.add_column();
        let done = board.add_column();
        board.set_column_title(&todo, "Todo".to_string());
        board.set_column_title(&done, "Done".to_string());
        let task = board.add_task(&todo).unwrap();
        board.set_task_title(&todo, &task, "Write spec".to_string());
        (board, todo, done, task)
    }

    #[test]
    fn test_board_creation() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.task_count(), 0);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ColumnId::generate();
        let b = ColumnId::generate();
        assert_ne!(a, b);

        let c = TaskId::generate();
        let d = TaskId::generate();
        assert_ne!(c, d);
    }

    #[test]
    fn test_add_column_uses_default_title() {
        let mut board = Board::new();
        let id = board.add_column();

        assert_eq!(board.len(), 1);
        let column = board.column(&id).unwrap();
        assert_eq!(column.title, Column::DEFAULT_TITLE);
        assert!(column.tasks.is_empty());
    }

    #[test]
    fn test_remove_column_drops_its_tasks() {
        let (mut board, todo, done, _) = sample_board();

        assert!(board.remove_column(&todo));
        assert_eq!(board.len(), 1);
        assert!(board.column(&todo).is_none());
        assert!(board.contains_column(&done));
        assert_eq!(board.task_count(), 0);
    }

    #[test]
    fn test_remove_column_unknown_id() {
        let (mut board, ..) = sample_board();
        let before = board.clone();

        assert!(!board.remove_column(&ColumnId::from("missing")));
        assert_eq!(board, before);
    }

    #[test]
    fn test_add_task_appends_to_named_column() {
        let (mut board, todo, done, _) = sample_board();

        let id = board.add_task(&todo).unwrap();
        let column = board.column(&todo).unwrap();
        assert_eq!(column.tasks.len(), 2);
        assert_eq!(column.tasks[1].id, id);
        assert_eq!(column.tasks[1].title, Task::DEFAULT_TITLE);
        assert!(board.column(&done).unwrap().tasks.is_empty());
    }

    #[test]
    fn test_add_task_unknown_column() {
        let (mut board, ..) = sample_board();
        let before = board.clone();

        assert!(board.add_task(&ColumnId::from("missing")).is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_set_column_title() {
        let (mut board, todo, ..) = sample_board();

        assert!(board.set_column_title(&todo, "Backlog".to_string()));
        assert_eq!(board.column(&todo).unwrap().title, "Backlog");

        // Empty titles are allowed
        assert!(board.set_column_title(&todo, String::new()));
        assert_eq!(board.column(&todo).unwrap().title, "");
    }

    #[test]
    fn test_set_column_title_unknown_id() {
        let (mut board, ..) = sample_board();
        assert!(!board.set_column_title(&ColumnId::from("missing"), "X".to_string()));
    }

    #[test]
    fn test_set_task_title() {
        let (mut board, todo, _, task) = sample_board();

        assert!(board.set_task_title(&todo, &task, "Review spec".to_string()));
        assert_eq!(board.column(&todo).unwrap().tasks[0].title, "Review spec");
    }

    #[test]
    fn test_set_task_title_wrong_column() {
        let (mut board, _, done, task) = sample_board();
        let before = board.clone();

        // Task lives in "Todo", not "Done"
        assert!(!board.set_task_title(&done, &task, "X".to_string()));
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_task_is_atomic() {
        let (mut board, todo, done, task) = sample_board();
        let extra = board.add_column();
        let before_count = board.task_count();

        assert!(board.move_task(&todo, &done, &task));

        assert!(board.column(&todo).unwrap().tasks.is_empty());
        let done_tasks = &board.column(&done).unwrap().tasks;
        assert_eq!(done_tasks.len(), 1);
        assert_eq!(done_tasks[0].id, task);
        assert_eq!(done_tasks[0].title, "Write spec");
        assert_eq!(board.task_count(), before_count);
        assert!(board.column(&extra).unwrap().tasks.is_empty());
    }

    #[test]
    fn test_move_task_appends_to_end_of_target() {
        let (mut board, todo, done, task) = sample_board();
        let existing = board.add_task(&done).unwrap();

        assert!(board.move_task(&todo, &done, &task));

        let done_tasks = &board.column(&done).unwrap().tasks;
        assert_eq!(done_tasks.len(), 2);
        assert_eq!(done_tasks[0].id, existing);
        assert_eq!(done_tasks[1].id, task);
    }

    #[test]
    fn test_move_task_onto_own_column_is_noop() {
        let (mut board, todo, _, task) = sample_board();
        let before = board.clone();

        assert!(!board.move_task(&todo, &todo, &task));
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_task_unknown_ids_leave_board_untouched() {
        let (mut board, todo, done, task) = sample_board();
        let before = board.clone();

        assert!(!board.move_task(&ColumnId::from("missing"), &done, &task));
        assert!(!board.move_task(&todo, &ColumnId::from("missing"), &task));
        assert!(!board.move_task(&todo, &done, &TaskId::from("missing")));
        assert_eq!(board, before);
    }

    #[test]
    fn test_board_serializes_as_bare_column_array() {
        let (board, todo, _, task) = sample_board();

        let json = serde_json::to_string(&board).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let columns = value.as_array().unwrap();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0]["id"], todo.as_str());
        assert_eq!(columns[0]["title"], "Todo");
        assert_eq!(columns[0]["tasks"][0]["id"], task.as_str());
        assert_eq!(columns[0]["tasks"][0]["title"], "Write spec");

        // Exactly id/title/tasks on a column and id/title on a task
        assert_eq!(columns[0].as_object().unwrap().len(), 3);
        assert_eq!(columns[0]["tasks"][0].as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_board_hydrates_from_saved_json() {
        let saved = r#"[
            {"id": "col-1", "title": "Backlog", "tasks": [{"id": "task-1", "title": "Ship it"}]},
            {"id": "col-2", "title": "Doing", "tasks": []}
        ]"#;

        let board: Board = serde_json::from_str(saved).unwrap();
        assert_eq!(board.len(), 2);

        let backlog = board.column(&ColumnId::from("col-1")).unwrap();
        assert_eq!(backlog.title, "Backlog");
        assert_eq!(backlog.tasks.len(), 1);
        assert_eq!(backlog.tasks[0].id, TaskId::from("task-1"));
        assert_eq!(backlog.tasks[0].title, "Ship it");
    }

    #[test]
    fn test_board_serialization_round_trip() {
        let (board, ..) = sample_board();

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }
}
