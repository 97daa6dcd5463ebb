use super::types::{BOARD_SIZE, Position, Symbol, WinningLine};

pub type Grid = [[Option<Symbol>; BOARD_SIZE]; BOARD_SIZE];

type Line = [Position; BOARD_SIZE];

/// Every line in scan order: rows top to bottom, columns left to right,
/// then the main diagonal and the anti-diagonal.
const LINES: [Line; 8] = [
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
];

pub fn check_win(grid: &Grid) -> Option<&Symbol> {
    LINES.iter().find_map(|line| completed_by(grid, line))
}

pub fn check_win_with_line(grid: &Grid) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        completed_by(grid, line)
            .map(|symbol| WinningLine::new(symbol.clone(), line[0], line[BOARD_SIZE - 1]))
    })
}

fn completed_by<'a>(grid: &'a Grid, line: &Line) -> Option<&'a Symbol> {
    let first = cell(grid, line[0]).as_ref()?;
    if line[1..].iter().all(|&pos| cell(grid, pos).as_ref() == Some(first)) {
        Some(first)
    } else {
        None
    }
}

fn cell(grid: &Grid, pos: Position) -> &Option<Symbol> {
    &grid[pos.row()][pos.column()]
}
