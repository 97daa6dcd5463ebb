use common::tictactoe::PlayerSetup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    PlaceMark { row: usize, column: usize },
    Reset,
    NewMatch { first: PlayerSetup, second: PlayerSetup },
    Score,
    Help,
    Quit,
    Invalid { input: String, reason: String },
}

impl ClientCommand {
    /// Blank lines parse to `None`. Anything unrecognised becomes `Invalid`.
    pub fn parse(line: &str) -> Option<ClientCommand> {
        let input = line.trim();
        if input.is_empty() {
            return None;
        }

        let mut words = input.split_whitespace();
        if words.next().is_some_and(|word| word.eq_ignore_ascii_case("new")) {
            let args: Vec<&str> = words.collect();
            return Some(parse_new_match(&args).unwrap_or_else(|reason| ClientCommand::Invalid {
                input: input.to_string(),
                reason,
            }));
        }

        let command = match input.to_ascii_lowercase().as_str() {
            "reset" | "r" => ClientCommand::Reset,
            "score" | "s" => ClientCommand::Score,
            "help" | "h" | "?" => ClientCommand::Help,
            "quit" | "q" | "exit" => ClientCommand::Quit,
            _ => parse_place_mark(input).unwrap_or_else(|reason| ClientCommand::Invalid {
                input: input.to_string(),
                reason,
            }),
        };
        Some(command)
    }
}

fn parse_new_match(args: &[&str]) -> Result<ClientCommand, String> {
    let [first_name, first_symbol, second_name, second_symbol] = args else {
        return Err("expected `new <name1> <symbol1> <name2> <symbol2>`".to_string());
    };

    Ok(ClientCommand::NewMatch {
        first: PlayerSetup::new(*first_name, *first_symbol, None),
        second: PlayerSetup::new(*second_name, *second_symbol, None),
    })
}

fn parse_place_mark(input: &str) -> Result<ClientCommand, String> {
    let parts: Vec<&str> = input
        .split([',', ' '])
        .filter(|part| !part.is_empty())
        .collect();

    let [row, column] = parts.as_slice() else {
        return Err("expected a row and a column, e.g. `1 2`".to_string());
    };

    let row = row
        .parse::<usize>()
        .map_err(|_| format!("row `{}` is not a number", row))?;
    let column = column
        .parse::<usize>()
        .map_err(|_| format!("column `{}` is not a number", column))?;

    Ok(ClientCommand::PlaceMark { row, column })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(
            ClientCommand::parse("1 2"),
            Some(ClientCommand::PlaceMark { row: 1, column: 2 })
        );
        assert_eq!(
            ClientCommand::parse(" 0,2 "),
            Some(ClientCommand::PlaceMark { row: 0, column: 2 })
        );
        assert_eq!(
            ClientCommand::parse("2, 1"),
            Some(ClientCommand::PlaceMark { row: 2, column: 1 })
        );
    }

    #[test]
    fn test_out_of_range_coordinates_still_parse() {
        // Range checks belong to the game.
        assert_eq!(
            ClientCommand::parse("5 9"),
            Some(ClientCommand::PlaceMark { row: 5, column: 9 })
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(ClientCommand::parse("reset"), Some(ClientCommand::Reset));
        assert_eq!(ClientCommand::parse("SCORE"), Some(ClientCommand::Score));
        assert_eq!(ClientCommand::parse("?"), Some(ClientCommand::Help));
        assert_eq!(ClientCommand::parse("q"), Some(ClientCommand::Quit));
        assert_eq!(ClientCommand::parse("   "), None);
    }

    #[test]
    fn test_parse_new_match() {
        assert_eq!(
            ClientCommand::parse("new Carol @ Dave #"),
            Some(ClientCommand::NewMatch {
                first: PlayerSetup::new("Carol", "@", None),
                second: PlayerSetup::new("Dave", "#", None),
            })
        );
        assert!(matches!(
            ClientCommand::parse("NEW  Carol X  Dave O"),
            Some(ClientCommand::NewMatch { .. })
        ));
    }

    #[test]
    fn test_new_match_needs_four_arguments() {
        assert!(matches!(
            ClientCommand::parse("new"),
            Some(ClientCommand::Invalid { reason, .. }) if reason.contains("<symbol2>")
        ));
        assert!(matches!(
            ClientCommand::parse("new Carol X Dave"),
            Some(ClientCommand::Invalid { .. })
        ));
    }

    #[test]
    fn test_parse_garbage_is_invalid() {
        assert!(matches!(
            ClientCommand::parse("1"),
            Some(ClientCommand::Invalid { .. })
        ));
        assert!(matches!(
            ClientCommand::parse("a b"),
            Some(ClientCommand::Invalid { reason, .. }) if reason.contains("row")
        ));
        assert!(matches!(
            ClientCommand::parse("1 -2"),
            Some(ClientCommand::Invalid { reason, .. }) if reason.contains("column")
        ));
        assert!(matches!(
            ClientCommand::parse("1 2 3"),
            Some(ClientCommand::Invalid { .. })
        ));
    }
}
