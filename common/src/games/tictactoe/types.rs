use std::fmt;

use super::error::{GameError, SetupError};

pub const BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Result<Self, GameError> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return Err(GameError::InvalidCoordinate { row, column });
        }
        Ok(Self { row, column })
    }

    /// Caller guarantees both indices are below `BOARD_SIZE`.
    pub(crate) const fn at(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |column| Position::at(row, column)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The mark a player places on the board: one non-empty token without whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> Result<Self, SetupError> {
        let symbol = symbol.into();
        if symbol.is_empty() || symbol.chars().any(char::is_whitespace) {
            return Err(SetupError::InvalidSymbol(symbol));
        }
        Ok(Self(symbol))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    First,
    Second,
}

impl PlayerSlot {
    pub fn other(&self) -> PlayerSlot {
        match self {
            PlayerSlot::First => PlayerSlot::Second,
            PlayerSlot::Second => PlayerSlot::First,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            PlayerSlot::First => 0,
            PlayerSlot::Second => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerSlot),
    Tie,
}

/// Result of one accepted move. Rejected moves are reported as `GameError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Continue { symbol: Symbol },
    Winner { player: PlayerSlot, symbol: Symbol },
    Tie { symbol: Symbol },
}

impl RoundOutcome {
    pub fn symbol(&self) -> &Symbol {
        match self {
            RoundOutcome::Continue { symbol }
            | RoundOutcome::Winner { symbol, .. }
            | RoundOutcome::Tie { symbol } => symbol,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundOutcome::Continue { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub symbol: Symbol,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(symbol: Symbol, start: Position, end: Position) -> Self {
        Self { symbol, start, end }
    }

    /// All three cells of the line, from `start` to `end`.
    pub fn positions(&self) -> [Position; BOARD_SIZE] {
        let middle = Position::at(
            (self.start.row + self.end.row) / 2,
            (self.start.column + self.end.column) / 2,
        );
        [self.start, middle, self.end]
    }

    pub fn contains(&self, position: Position) -> bool {
        self.positions().contains(&position)
    }
}
