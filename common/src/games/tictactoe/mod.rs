mod board;
mod error;
mod game_state;
mod player;
mod setup;
mod types;
mod win_detector;

pub use board::Board;
pub use error::{GameError, SetupError};
pub use game_state::Game;
pub use player::Player;
pub use setup::{MatchSetup, PlayerSetup};
pub use types::{BOARD_SIZE, GameStatus, PlayerSlot, Position, RoundOutcome, Symbol, WinningLine};
pub use win_detector::{Grid, check_win, check_win_with_line};
