mod config;
mod player_config;

pub use config::{Config, get_config_manager};
pub use player_config::PlayerConfig;
