use std::path::PathBuf;

use sapper_core::{Coord, Coord2};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Save(Option<PathBuf>),
    Quit,
    Help,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Enter a command, type `h` for help")]
    Empty,
    #[error("Unknown command `{0}`, type `h` for help")]
    Unknown(String),
    #[error("Expected a row and a column")]
    MissingCoordinates,
    #[error("`{0}` is not a number")]
    InvalidNumber(String),
    #[error("{value} is off the board, use 1 to {size}")]
    OutOfRange { value: usize, size: Coord },
    #[error("Unexpected trailing input `{0}`")]
    TrailingInput(String),
}

pub const HELP: &str = "\
Commands:
  r <row> <col>   reveal a cell
  f <row> <col>   flag or unflag a cell
  s [path]        save the game
  q               quit
  h               show this help
Rows and columns start at 1.";

/// Parses one line of player input for a board of the given side length.
pub fn parse(line: &str, size: Coord) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(CommandError::Empty);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "r" | "reveal" => Command::Reveal(parse_coords(&mut words, size)?),
        "f" | "flag" => Command::Flag(parse_coords(&mut words, size)?),
        "s" | "save" => Command::Save(words.next().map(PathBuf::from)),
        "q" | "quit" => Command::Quit,
        "h" | "help" | "?" => Command::Help,
        _ => return Err(CommandError::Unknown(verb.to_string())),
    };

    match words.next() {
        Some(extra) => Err(CommandError::TrailingInput(extra.to_string())),
        None => Ok(command),
    }
}

fn parse_coords<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    size: Coord,
) -> Result<Coord2, CommandError> {
    let row = parse_axis(words.next(), size)?;
    let col = parse_axis(words.next(), size)?;
    Ok((row, col))
}

/// Converts a 1-based coordinate to a 0-based one.
fn parse_axis(word: Option<&str>, size: Coord) -> Result<Coord, CommandError> {
    let word = word.ok_or(CommandError::MissingCoordinates)?;
    let value: usize = word
        .parse()
        .map_err(|_| CommandError::InvalidNumber(word.to_string()))?;
    if value == 0 || value > usize::from(size) {
        return Err(CommandError::OutOfRange { value, size });
    }
    Ok((value - 1) as Coord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves_as_zero_based() {
        assert_eq!(parse("r 1 1", 9), Ok(Command::Reveal((0, 0))));
        assert_eq!(parse("  F 9 3 ", 9), Ok(Command::Flag((8, 2))));
        assert_eq!(parse("reveal 16 16", 16), Ok(Command::Reveal((15, 15))));
    }

    #[test]
    fn parses_other_commands() {
        assert_eq!(parse("s", 9), Ok(Command::Save(None)));
        assert_eq!(
            parse("save game.json", 9),
            Ok(Command::Save(Some(PathBuf::from("game.json"))))
        );
        assert_eq!(parse("q", 9), Ok(Command::Quit));
        assert_eq!(parse("help", 9), Ok(Command::Help));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse("", 9), Err(CommandError::Empty));
        assert_eq!(parse("x 1 1", 9), Err(CommandError::Unknown("x".into())));
        assert_eq!(parse("r 1", 9), Err(CommandError::MissingCoordinates));
        assert_eq!(parse("r a 1", 9), Err(CommandError::InvalidNumber("a".into())));
        assert_eq!(parse("r -1 1", 9), Err(CommandError::InvalidNumber("-1".into())));
        assert_eq!(
            parse("r 0 1", 9),
            Err(CommandError::OutOfRange { value: 0, size: 9 })
        );
        assert_eq!(
            parse("f 1 10", 9),
            Err(CommandError::OutOfRange { value: 10, size: 9 })
        );
        assert_eq!(parse("q now", 9), Err(CommandError::TrailingInput("now".into())));
    }
}
