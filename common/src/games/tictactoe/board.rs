use super::types::{Position, Symbol, WinningLine};
use super::win_detector::{Grid, check_win, check_win_with_line};

/// The 3×3 grid. Cells only change through `make_move` and `reset_board`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `symbol` at `position`. Returns false without touching the
    /// board when the cell is already marked.
    pub fn make_move(&mut self, position: Position, symbol: Symbol) -> bool {
        let cell = &mut self.cells[position.row()][position.column()];
        if cell.is_some() {
            return false;
        }
        *cell = Some(symbol);
        true
    }

    pub fn winner(&self) -> Option<&Symbol> {
        check_win(&self.cells)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    pub fn reset_board(&mut self) {
        self.cells = Grid::default();
    }

    pub fn cell(&self, position: Position) -> Option<&Symbol> {
        self.cells[position.row()][position.column()].as_ref()
    }

    pub fn rows(&self) -> &Grid {
        &self.cells
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all()
            .filter(|&pos| self.cell(pos).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, column: usize) -> Position {
        Position::new(row, column).unwrap()
    }

    fn sym(s: &str) -> Symbol {
        Symbol::new(s).unwrap()
    }

    #[test]
    fn test_make_move_marks_empty_cell() {
        let mut board = Board::new();
        assert!(board.make_move(pos(1, 2), sym("X")));
        assert_eq!(board.cell(pos(1, 2)), Some(&sym("X")));
        assert_eq!(board.empty_positions().len(), 8);
    }

    #[test]
    fn test_make_move_on_occupied_cell_is_rejected_without_mutation() {
        let mut board = Board::new();
        assert!(board.make_move(pos(0, 0), sym("X")));
        let snapshot = board.clone();

        for _ in 0..3 {
            assert!(!board.make_move(pos(0, 0), sym("O")));
            assert!(!board.make_move(pos(0, 0), sym("X")));
            assert_eq!(board, snapshot);
        }
        assert_eq!(board.cell(pos(0, 0)), Some(&sym("X")));
    }

    #[test]
    fn test_only_explicitly_set_cells_are_marked() {
        let mut board = Board::new();
        board.make_move(pos(0, 1), sym("X"));
        board.make_move(pos(2, 0), sym("O"));

        for position in Position::all() {
            let expected = match (position.row(), position.column()) {
                (0, 1) => Some(sym("X")),
                (2, 0) => Some(sym("O")),
                _ => None,
            };
            assert_eq!(board.cell(position).cloned(), expected);
        }
    }

    #[test]
    fn test_is_full_only_when_every_cell_is_marked() {
        let mut board = Board::new();
        let positions: Vec<Position> = Position::all().collect();
        for (i, &position) in positions.iter().enumerate() {
            assert!(!board.is_full());
            let symbol = if i % 2 == 0 { "X" } else { "O" };
            board.make_move(position, sym(symbol));
        }
        assert!(board.is_full());
        assert!(board.empty_positions().is_empty());
    }

    #[test]
    fn test_winner_reported_for_completed_row() {
        let mut board = Board::new();
        board.make_move(pos(2, 0), sym("O"));
        board.make_move(pos(2, 1), sym("O"));
        assert_eq!(board.winner(), None);
        board.make_move(pos(2, 2), sym("O"));
        assert_eq!(board.winner(), Some(&sym("O")));

        let line = board.winning_line().unwrap();
        assert_eq!(line.start, pos(2, 0));
        assert_eq!(line.end, pos(2, 2));
    }

    #[test]
    fn test_reset_board_clears_everything_and_is_idempotent() {
        let mut board = Board::new();
        for position in Position::all() {
            board.make_move(position, sym("X"));
        }
        assert!(board.is_full());
        assert!(board.winner().is_some());

        board.reset_board();
        assert!(!board.is_full());
        assert_eq!(board.winner(), None);
        assert_eq!(board, Board::new());

        board.reset_board();
        assert_eq!(board, Board::new());
        assert_eq!(board.empty_positions().len(), 9);
    }
}
