use common::config::Validate;
use common::id_generator::generate_player_name;
use common::tictactoe::{PlayerSetup, Symbol};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayerConfig {
    /// Left blank, a random name is picked at match setup.
    #[serde(default)]
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl PlayerConfig {
    pub fn new(name: &str, symbol: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            avatar: None,
        }
    }

    /// A blank name is replaced by a generated one that is not in `taken`.
    pub fn to_setup(&self, taken: &[&str]) -> PlayerSetup {
        let name = if self.name.trim().is_empty() {
            generate_player_name(taken)
        } else {
            self.name.clone()
        };
        PlayerSetup::new(name, self.symbol.clone(), self.avatar.clone())
    }
}

impl Validate for PlayerConfig {
    fn validate(&self) -> Result<(), String> {
        Symbol::new(self.symbol.as_str()).map_err(|e| e.to_string())?;
        if let Some(avatar) = &self.avatar
            && avatar.trim().is_empty()
        {
            return Err("avatar must not be empty if provided".to_string());
        }
        Ok(())
    }
}
