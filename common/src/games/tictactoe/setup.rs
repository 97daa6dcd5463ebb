use serde::{Deserialize, Serialize};

use super::error::SetupError;
use super::game_state::Game;
use super::player::Player;
use super::types::Symbol;

/// Raw identity of one player as entered before a match starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl PlayerSetup {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, avatar: Option<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            avatar,
        }
    }

    fn into_player(self) -> Result<Player, SetupError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SetupError::EmptyName);
        }
        let symbol = Symbol::new(self.symbol)?;
        Ok(Player::new(name, symbol, self.avatar))
    }
}

/// Two validated players with distinct symbols, ready to start a game.
#[derive(Debug, Clone)]
pub struct MatchSetup {
    first: Player,
    second: Player,
}

impl MatchSetup {
    pub fn new(first: PlayerSetup, second: PlayerSetup) -> Result<Self, SetupError> {
        let first = first.into_player()?;
        let second = second.into_player()?;

        if first.symbol() == second.symbol() {
            return Err(SetupError::DuplicateSymbol(first.symbol().to_string()));
        }

        Ok(Self { first, second })
    }

    pub fn first(&self) -> &Player {
        &self.first
    }

    pub fn second(&self) -> &Player {
        &self.second
    }

    pub fn into_game(self) -> Game {
        Game::new(self.first, self.second)
    }
}
