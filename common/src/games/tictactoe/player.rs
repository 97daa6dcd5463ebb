use super::types::Symbol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    symbol: Symbol,
    avatar: Option<String>,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, symbol: Symbol, avatar: Option<String>) -> Self {
        Self {
            name: name.into(),
            symbol,
            avatar,
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn increase_score(&mut self) {
        self.score = self.score.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_at_zero() {
        let player = Player::new("John", Symbol::new("X").unwrap(), Some("nes-mario".to_string()));
        assert_eq!(player.name(), "John");
        assert_eq!(player.symbol().as_str(), "X");
        assert_eq!(player.avatar(), Some("nes-mario"));
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_increase_score_counts_each_call() {
        let mut player = Player::new("Jane", Symbol::new("O").unwrap(), None);
        for _ in 0..7 {
            player.increase_score();
        }
        assert_eq!(player.score(), 7);
        assert_eq!(player.avatar(), None);
    }
}
