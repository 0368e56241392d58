use std::str::FromStr;

use sweeper_core::{Coord, Coord2};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Left click
    Open(Coord2),
    /// Right click
    Flag(Coord2),
    NewGame,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, type h for help")]
    Unknown(String),
    #[error("expected `<row> <col>` after `{0}`")]
    MissingCoords(String),
    #[error("`{0}` is not a valid coordinate")]
    BadCoord(String),
    #[error("unexpected trailing input `{0}`")]
    Trailing(String),
}

pub const HELP: &str = "\
Commands:
  o <row> <col>   open a cell, or chord a revealed number
  f <row> <col>   toggle a flag
  n               new game
  h               show this help
  q               quit";

fn parse_coord(token: &str) -> Result<Coord, ParseCommandError> {
    token
        .parse()
        .map_err(|_| ParseCommandError::BadCoord(token.to_string()))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or(ParseCommandError::Empty)?;

        let command = match verb.to_ascii_lowercase().as_str() {
            "o" | "open" | "f" | "flag" => {
                let (Some(row), Some(col)) = (tokens.next(), tokens.next()) else {
                    return Err(ParseCommandError::MissingCoords(verb.to_string()));
                };
                let coords = (parse_coord(row)?, parse_coord(col)?);
                if verb.starts_with(['o', 'O']) {
                    Command::Open(coords)
                } else {
                    Command::Flag(coords)
                }
            }
            "n" | "new" => Command::NewGame,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(ParseCommandError::Unknown(verb.to_string())),
        };

        match tokens.next() {
            Some(extra) => Err(ParseCommandError::Trailing(extra.to_string())),
            None => Ok(command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clicks() {
        assert_eq!("o 3 4".parse::<Command>(), Ok(Command::Open((3, 4))));
        assert_eq!("  open 0 29 ".parse::<Command>(), Ok(Command::Open((0, 29))));
        assert_eq!("f 15 0".parse::<Command>(), Ok(Command::Flag((15, 0))));
        assert_eq!("FLAG 1 2".parse::<Command>(), Ok(Command::Flag((1, 2))));
    }

    #[test]
    fn parses_bare_verbs() {
        assert_eq!("n".parse::<Command>(), Ok(Command::NewGame));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "x 1 1".parse::<Command>(),
            Err(ParseCommandError::Unknown("x".into()))
        );
        assert_eq!(
            "o 1".parse::<Command>(),
            Err(ParseCommandError::MissingCoords("o".into()))
        );
        assert_eq!(
            "f -1 2".parse::<Command>(),
            Err(ParseCommandError::BadCoord("-1".into()))
        );
        assert_eq!(
            "o 1 2 3".parse::<Command>(),
            Err(ParseCommandError::Trailing("3".into()))
        );
        assert_eq!(
            "q now".parse::<Command>(),
            Err(ParseCommandError::Trailing("now".into()))
        );
    }
}
