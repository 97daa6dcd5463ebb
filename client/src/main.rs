mod config;
mod render;
mod runner;
mod state;

use std::path::PathBuf;

use clap::Parser;
use common::{log, logger};
use tokio::sync::mpsc;

use config::{Config, get_config_manager};
use runner::{read_commands, run_match};

#[derive(Parser)]
#[command(name = "tic_tac_toe_client", about = "Two-player tic-tac-toe in the terminal")]
struct Args {
    /// Path to the YAML config, defaults to a file next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    player1_name: Option<String>,
    #[arg(long)]
    player1_symbol: Option<String>,
    /// Shown next to the name on the scoreboard
    #[arg(long)]
    player1_avatar: Option<String>,
    #[arg(long)]
    player2_name: Option<String>,
    #[arg(long)]
    player2_symbol: Option<String>,
    #[arg(long)]
    player2_avatar: Option<String>,
    #[arg(long)]
    hide_coordinates: bool,
    /// Write the effective player setup back to the config file
    #[arg(long)]
    save_config: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(name) = &self.player1_name {
            config.player1.name = name.clone();
        }
        if let Some(symbol) = &self.player1_symbol {
            config.player1.symbol = symbol.clone();
        }
        if let Some(avatar) = &self.player1_avatar {
            config.player1.avatar = Some(avatar.clone());
        }
        if let Some(name) = &self.player2_name {
            config.player2.name = name.clone();
        }
        if let Some(symbol) = &self.player2_symbol {
            config.player2.symbol = symbol.clone();
        }
        if let Some(avatar) = &self.player2_avatar {
            config.player2.avatar = Some(avatar.clone());
        }
        if self.hide_coordinates {
            config.show_coordinates = false;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.clone());
    let mut config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("{}, falling back to defaults", e);
            Config::default()
        }
    };
    args.apply_overrides(&mut config);

    let setup = config
        .match_setup()
        .map_err(|e| format!("Invalid match setup: {}", e))?;
    log!(
        "Match set up: {} ({}) vs {} ({})",
        setup.first().name(),
        setup.first().symbol(),
        setup.second().name(),
        setup.second().symbol()
    );

    if args.save_config
        && let Err(e) = config_manager.set_config(&config)
    {
        log!("Failed to save config: {}", e);
    }

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    tokio::spawn(read_commands(command_tx));

    run_match(setup.into_game(), command_rx, config.show_coordinates).await;

    Ok(())
}
