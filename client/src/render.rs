use common::tictactoe::{
    BOARD_SIZE, Board, Game, GameError, GameStatus, PlayerSlot, Position, RoundOutcome, WinningLine,
};

fn cell_width(game: &Game) -> usize {
    game.players()
        .iter()
        .map(|p| p.symbol().as_str().chars().count())
        .max()
        .unwrap_or(1)
        .max(1)
}

/// Cells of the winning line are drawn as `[X]`, the last move as `(X)`.
pub fn render_board(
    board: &Board,
    width: usize,
    show_coordinates: bool,
    winning_line: Option<&WinningLine>,
    last_move: Option<Position>,
) -> String {
    let mut out = String::new();
    let separator = vec!["-".repeat(width + 2); BOARD_SIZE].join("+");

    if show_coordinates {
        out.push_str("   ");
        for column in 0..BOARD_SIZE {
            out.push_str(&format!(" {:^width$} ", column, width = width));
            if column + 1 < BOARD_SIZE {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    let positions: Vec<Position> = Position::all().collect();
    for (row, row_positions) in positions.chunks(BOARD_SIZE).enumerate() {
        if show_coordinates {
            out.push_str(&format!("{:>2} ", row));
        }
        let rendered: Vec<String> = row_positions
            .iter()
            .map(|&position| {
                let mark = board.cell(position).map(|symbol| symbol.as_str()).unwrap_or("");
                let (open, close) = if winning_line.is_some_and(|line| line.contains(position)) {
                    ('[', ']')
                } else if last_move == Some(position) {
                    ('(', ')')
                } else {
                    (' ', ' ')
                };
                format!("{}{:^width$}{}", open, mark, close, width = width)
            })
            .collect();
        out.push_str(&rendered.join("|"));
        out.push('\n');

        if row + 1 < BOARD_SIZE {
            if show_coordinates {
                out.push_str("   ");
            }
            out.push_str(&separator);
            out.push('\n');
        }
    }
    out
}

pub fn render_game(game: &Game, show_coordinates: bool) -> String {
    let winning_line = if game.is_over() {
        game.board().winning_line()
    } else {
        None
    };
    render_board(
        game.board(),
        cell_width(game),
        show_coordinates,
        winning_line.as_ref(),
        game.last_move(),
    )
}

pub fn render_scores(game: &Game) -> String {
    game.players()
        .iter()
        .map(|p| match p.avatar() {
            Some(avatar) => format!("{} [{}] ({}): {}", p.name(), avatar, p.symbol(), p.score()),
            None => format!("{} ({}): {}", p.name(), p.symbol(), p.score()),
        })
        .collect::<Vec<_>>()
        .join("  |  ")
}

pub fn render_prompt(game: &Game) -> String {
    match game.status() {
        GameStatus::InProgress => {
            let player = game.current_player();
            format!("{} ({}) to move, enter `row column`:", player.name(), player.symbol())
        }
        GameStatus::Won(slot) => format!(
            "{} won this round. Type `reset` for another round or `new` for a new match.",
            game.player(slot).name()
        ),
        GameStatus::Tie => {
            "This round is a tie. Type `reset` for another round or `new` for a new match.".to_string()
        }
    }
}

pub fn describe_outcome(game: &Game, outcome: &RoundOutcome) -> String {
    match outcome {
        RoundOutcome::Continue { .. } => render_prompt(game),
        RoundOutcome::Winner { player, symbol } => {
            let winner = game.player(*player);
            format!(
                "{} wins with {}! Score: {}. Type `reset` for another round.",
                winner.name(),
                symbol,
                winner.score()
            )
        }
        RoundOutcome::Tie { .. } => "It's a tie! Type `reset` for another round.".to_string(),
    }
}

pub fn describe_error(game: &Game, error: &GameError) -> String {
    match error {
        GameError::CellOccupied { .. } => {
            let free: Vec<String> = game
                .board()
                .empty_positions()
                .iter()
                .map(|p| format!("{} {}", p.row(), p.column()))
                .collect();
            format!("{}. Free cells: {}", error, free.join(", "))
        }
        GameError::InvalidCoordinate { .. } => error.to_string(),
        GameError::GameOver => format!("{}. {}", error, render_prompt(game)),
    }
}

pub fn slot_label(slot: PlayerSlot) -> &'static str {
    match slot {
        PlayerSlot::First => "player 1",
        PlayerSlot::Second => "player 2",
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  <row> <column>   place your mark, rows and columns are 0, 1 or 2 (`1 2` or `1,2`)
  reset            clear the board for a new round, scores are kept
  new <name1> <symbol1> <name2> <symbol2>
                   start a new match with these players, scores start at 0
  score            show the scoreboard
  help             show this help
  quit             leave the game";
