use crate::domain::board::{Board, Column};

/// Produces the search projection of a board.
///
/// Every column is kept with its id and title intact; each task list is
/// narrowed to the tasks whose title contains `term`, case-insensitively.
/// The empty term matches every task. The projection is display-only and
/// discarded after each render; mutations go through the live board, never
/// through a projection.
///
/// # Examples
/// ```
/// use tavla_core::domain::board::Board;
/// use tavla_core::domain::filter::filter_board;
///
/// let mut board = Board::new();
/// let inbox = board.add_column();
/// board.add_task(&inbox).unwrap();
///
/// let projection = filter_board(&board, "new");
/// assert_eq!(projection.column(&inbox).unwrap().tasks.len(), 1);
///
/// let projection = filter_board(&board, "launch");
/// assert!(projection.column(&inbox).unwrap().tasks.is_empty());
/// ```
pub fn filter_board(board: &Board, term: &str) -> Board {
    let needle = term.to_lowercase();
    let columns = board
        .columns()
        .iter()
        .map(|column| Column {
            id: column.id.clone(),
            title: column.title.clone(),
            tasks: column
                .tasks
                .iter()
                .filter(|task| task.title.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        })
        .collect();
    Board::from_columns(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::Task;

    fn sample_board() -> Board {
        let mut todo = Column::with_title("Todo");
        todo.tasks.push(Task::with_title("Write spec"));
        todo.tasks.push(Task::with_title("Review PR"));

        let mut doing = Column::with_title("Doing");
        doing.tasks.push(Task::with_title("write tests"));

        let done = Column::with_title("Done");

        Board::from_columns(vec![todo, doing, done])
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let board = sample_board();

        let projection = filter_board(&board, "WRITE");
        assert_eq!(projection.columns()[0].tasks.len(), 1);
        assert_eq!(projection.columns()[0].tasks[0].title, "Write spec");
        assert_eq!(projection.columns()[1].tasks.len(), 1);
        assert_eq!(projection.columns()[1].tasks[0].title, "write tests");
    }

    #[test]
    fn test_filter_never_removes_columns() {
        let board = sample_board();

        let projection = filter_board(&board, "no such task");
        assert_eq!(projection.len(), board.len());
        for (original, filtered) in board.columns().iter().zip(projection.columns()) {
            assert_eq!(filtered.id, original.id);
            assert_eq!(filtered.title, original.title);
            assert!(filtered.tasks.is_empty());
        }
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let board = sample_board();
        assert_eq!(filter_board(&board, ""), board);
    }

    #[test]
    fn test_filter_leaves_source_board_untouched() {
        let board = sample_board();
        let before = board.clone();

        let _ = filter_board(&board, "spec");
        assert_eq!(board, before);
    }

    #[test]
    fn test_substring_match() {
        let board = sample_board();

        let projection = filter_board(&board, "ev");
        // "Review PR" matches, nothing else does
        assert_eq!(projection.columns()[0].tasks.len(), 1);
        assert_eq!(projection.columns()[0].tasks[0].title, "Review PR");
        assert!(projection.columns()[1].tasks.is_empty());
    }
}
