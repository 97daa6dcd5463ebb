use common::log;
use common::tictactoe::{Game, MatchSetup, RoundOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::render::{
    HELP_TEXT, describe_error, describe_outcome, render_game, render_prompt, render_scores,
    slot_label,
};
use crate::state::ClientCommand;

#[derive(Debug, PartialEq, Eq)]
pub enum CommandResponse {
    Output(String),
    Quit(String),
}

pub async fn read_commands(command_tx: mpsc::UnboundedSender<ClientCommand>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let command = match lines.next_line().await {
            Ok(Some(line)) => match ClientCommand::parse(&line) {
                Some(command) => command,
                None => continue,
            },
            Ok(None) => ClientCommand::Quit,
            Err(e) => {
                log!("Failed to read from stdin: {}", e);
                ClientCommand::Quit
            }
        };

        let is_quit = command == ClientCommand::Quit;
        if command_tx.send(command).is_err() || is_quit {
            break;
        }
    }
}

pub async fn run_match(
    mut game: Game,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    show_coordinates: bool,
) {
    println!("{}", match_overview(&game, show_coordinates));

    while let Some(command) = command_rx.recv().await {
        match handle_command(&mut game, command, show_coordinates) {
            CommandResponse::Output(text) => println!("{}", text),
            CommandResponse::Quit(text) => {
                println!("{}", text);
                break;
            }
        }
    }

    log!("Match finished: {}", render_scores(&game));
}

fn match_overview(game: &Game, show_coordinates: bool) -> String {
    format!(
        "{}\n{}\n{}",
        render_scores(game),
        render_game(game, show_coordinates),
        render_prompt(game)
    )
}

pub fn handle_command(game: &mut Game, command: ClientCommand, show_coordinates: bool) -> CommandResponse {
    match command {
        ClientCommand::PlaceMark { row, column } => {
            let mover = game.current_slot();
            match game.play_round(row, column) {
                Ok(outcome) => {
                    match &outcome {
                        RoundOutcome::Winner { symbol, .. } => log!(
                            "{} ({}) won, score {}",
                            game.player(mover).name(),
                            symbol,
                            game.player(mover).score()
                        ),
                        RoundOutcome::Tie { .. } => log!("Round ended in a tie"),
                        RoundOutcome::Continue { .. } => {}
                    }
                    CommandResponse::Output(format!(
                        "{}\n{}",
                        render_game(game, show_coordinates),
                        describe_outcome(game, &outcome)
                    ))
                }
                Err(error) => {
                    log!("Rejected move by {} at ({}, {}): {}", slot_label(mover), row, column, error);
                    CommandResponse::Output(describe_error(game, &error))
                }
            }
        }
        ClientCommand::Reset => {
            game.reset_game();
            log!("Board reset, scores kept: {}", render_scores(game));
            CommandResponse::Output(match_overview(game, show_coordinates))
        }
        ClientCommand::NewMatch { first, second } => match MatchSetup::new(first, second) {
            Ok(setup) => {
                log!(
                    "New match: {} ({}) vs {} ({})",
                    setup.first().name(),
                    setup.first().symbol(),
                    setup.second().name(),
                    setup.second().symbol()
                );
                *game = setup.into_game();
                CommandResponse::Output(match_overview(game, show_coordinates))
            }
            Err(e) => {
                log!("Rejected new match: {}", e);
                CommandResponse::Output(format!("Can't start a new match: {}", e))
            }
        },
        ClientCommand::Score => CommandResponse::Output(render_scores(game)),
        ClientCommand::Help => CommandResponse::Output(HELP_TEXT.to_string()),
        ClientCommand::Quit => CommandResponse::Quit(format!("Final score: {}", render_scores(game))),
        ClientCommand::Invalid { input, reason } => {
            CommandResponse::Output(format!("Can't understand `{}`: {}. Type `help` for commands.", input, reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::tictactoe::{MatchSetup, PlayerSetup, PlayerSlot};

    fn new_game() -> Game {
        MatchSetup::new(
            PlayerSetup::new("Alice", "X", None),
            PlayerSetup::new("Bob", "O", None),
        )
        .unwrap()
        .into_game()
    }

    fn place(row: usize, column: usize) -> ClientCommand {
        ClientCommand::PlaceMark { row, column }
    }

    #[test]
    fn test_winning_sequence_through_commands() {
        let mut game = new_game();
        for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            handle_command(&mut game, place(row, column), false);
        }
        let CommandResponse::Output(text) = handle_command(&mut game, place(0, 2), false) else {
            panic!("expected output");
        };
        assert!(text.ends_with("Alice wins with X! Score: 1. Type `reset` for another round."));

        let CommandResponse::Output(text) = handle_command(&mut game, place(2, 2), false) else {
            panic!("expected output");
        };
        assert!(text.starts_with("Game is already over"));
    }

    #[test]
    fn test_reset_keeps_score_and_gives_first_move_back() {
        let mut game = new_game();
        for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            handle_command(&mut game, place(row, column), false);
        }
        handle_command(&mut game, ClientCommand::Reset, false);
        assert_eq!(game.current_slot(), PlayerSlot::First);
        assert!(!game.is_over());
        assert_eq!(
            handle_command(&mut game, ClientCommand::Score, false),
            CommandResponse::Output("Alice (X): 1  |  Bob (O): 0".to_string())
        );
    }

    #[test]
    fn test_invalid_input_does_not_touch_game() {
        let mut game = new_game();
        let response = handle_command(
            &mut game,
            ClientCommand::Invalid {
                input: "x".to_string(),
                reason: "nope".to_string(),
            },
            true,
        );
        assert!(matches!(response, CommandResponse::Output(text) if text.contains("`x`")));

        let CommandResponse::Output(text) = handle_command(&mut game, place(4, 0), true) else {
            panic!("expected output");
        };
        assert!(text.starts_with("Invalid coordinate (4, 0)"));
        assert_eq!(game.current_slot(), PlayerSlot::First);
    }

    #[test]
    fn test_new_match_replaces_players_and_scores() {
        let mut game = new_game();
        for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            handle_command(&mut game, place(row, column), false);
        }
        assert_eq!(game.player(PlayerSlot::First).score(), 1);

        let response = handle_command(&mut game, ClientCommand::parse("new Carol @ Dave #").unwrap(), false);
        let CommandResponse::Output(text) = response else {
            panic!("expected output");
        };
        assert!(text.starts_with("Carol (@): 0  |  Dave (#): 0"));
        assert!(text.ends_with("Carol (@) to move, enter `row column`:"));
        assert!(!game.is_over());
        assert_eq!(game.board().empty_positions().len(), 9);
    }

    #[test]
    fn test_rejected_new_match_keeps_current_game() {
        let mut game = new_game();
        for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            handle_command(&mut game, place(row, column), false);
        }

        let response = handle_command(&mut game, ClientCommand::parse("new Carol Z Dave Z").unwrap(), false);
        assert_eq!(
            response,
            CommandResponse::Output("Can't start a new match: Both players cannot pick the same symbol (Z)".to_string())
        );

        let blank_name = ClientCommand::NewMatch {
            first: PlayerSetup::new("Carol", "@", None),
            second: PlayerSetup::new("  ", "#", None),
        };
        assert_eq!(
            handle_command(&mut game, blank_name, false),
            CommandResponse::Output("Can't start a new match: Player name must not be empty".to_string())
        );

        assert_eq!(
            handle_command(&mut game, ClientCommand::Score, false),
            CommandResponse::Output("Alice (X): 1  |  Bob (O): 0".to_string())
        );
        assert!(game.is_over());
    }

    #[test]
    fn test_quit_reports_final_score() {
        let mut game = new_game();
        assert_eq!(
            handle_command(&mut game, ClientCommand::Quit, false),
            CommandResponse::Quit("Final score: Alice (X): 0  |  Bob (O): 0".to_string())
        );
    }

    #[tokio::test]
    async fn test_run_match_stops_on_quit() {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        command_tx.send(place(1, 1)).unwrap();
        command_tx.send(ClientCommand::Quit).unwrap();
        command_tx.send(place(0, 0)).unwrap();

        run_match(new_game(), command_rx, true).await;
    }
}
