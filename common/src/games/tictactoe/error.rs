use super::types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    CellOccupied { position: Position },
    InvalidCoordinate { row: usize, column: usize },
    GameOver,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::CellOccupied { position } => {
                write!(f, "Cell {} is already marked", position)
            }
            GameError::InvalidCoordinate { row, column } => {
                write!(f, "Invalid coordinate ({}, {}): row and column must be 0, 1 or 2", row, column)
            }
            GameError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    InvalidSymbol(String),
    DuplicateSymbol(String),
    EmptyName,
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::InvalidSymbol(symbol) => {
                write!(f, "Invalid symbol {:?}: must be one non-empty token", symbol)
            }
            SetupError::DuplicateSymbol(symbol) => {
                write!(f, "Both players cannot pick the same symbol ({})", symbol)
            }
            SetupError::EmptyName => write!(f, "Player name must not be empty"),
        }
    }
}

impl std::error::Error for SetupError {}
