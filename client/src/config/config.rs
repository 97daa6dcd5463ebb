use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::tictactoe::{MatchSetup, SetupError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::PlayerConfig;

const CONFIG_FILE_NAME: &str = "tic_tac_toe_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub player1: PlayerConfig,
    pub player2: PlayerConfig,
    #[serde(default = "default_show_coordinates")]
    pub show_coordinates: bool,
}

fn default_show_coordinates() -> bool {
    true
}

impl Config {
    pub fn match_setup(&self) -> Result<MatchSetup, SetupError> {
        let first = self.player1.to_setup(&[self.player2.name.trim()]);
        let second = self.player2.to_setup(&[first.name.trim()]);
        MatchSetup::new(first, second)
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.player1.validate()?;
        self.player2.validate()?;
        if self.player1.symbol == self.player2.symbol {
            return Err(SetupError::DuplicateSymbol(self.player1.symbol.clone()).to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player1: PlayerConfig::new("Player 1", "X"),
            player2: PlayerConfig::new("Player 2", "O"),
            show_coordinates: true,
        }
    }
}
