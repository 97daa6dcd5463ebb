use super::board::Board;
use super::error::GameError;
use super::player::Player;
use super::types::{GameStatus, PlayerSlot, Position, RoundOutcome};

/// Turn orchestration for one match between two players.
///
/// The first player always opens, both on construction and after
/// `reset_game`. Scores survive resets and live as long as the `Game`.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    board: Board,
    current: PlayerSlot,
    status: GameStatus,
    last_move: Option<Position>,
}

impl Game {
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            players: [first, second],
            board: Board::new(),
            current: PlayerSlot::First,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn play_round(&mut self, row: usize, column: usize) -> Result<RoundOutcome, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        let position = Position::new(row, column)?;
        let mover = self.current;
        let symbol = self.players[mover.index()].symbol().clone();

        if !self.board.make_move(position, symbol.clone()) {
            return Err(GameError::CellOccupied { position });
        }
        self.last_move = Some(position);

        if self.board.winner().is_some() {
            self.players[mover.index()].increase_score();
            self.status = GameStatus::Won(mover);
            return Ok(RoundOutcome::Winner { player: mover, symbol });
        }

        if self.board.is_full() {
            self.status = GameStatus::Tie;
            return Ok(RoundOutcome::Tie { symbol });
        }

        self.change_player();
        Ok(RoundOutcome::Continue { symbol })
    }

    pub fn change_player(&mut self) {
        self.current = self.current.other();
    }

    pub fn reset_game(&mut self) {
        self.current = PlayerSlot::First;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.board.reset_board();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn current_slot(&self) -> PlayerSlot {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}
