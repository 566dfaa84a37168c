use std::str::FromStr;

use sweep_core::{Coord, Coord2, Difficulty, GameError};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    /// Start over, optionally switching difficulty.
    NewGame(Option<Difficulty>),
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`, type `help` for the list")]
    Unknown(String),
    #[error("Expected a row and a column")]
    MissingCoordinates,
    #[error("`{0}` is not a valid row or column")]
    InvalidNumber(String),
    #[error("Unexpected argument `{0}`")]
    TrailingInput(String),
    #[error(transparent)]
    Difficulty(#[from] GameError),
}

fn parse_coord(word: Option<&str>) -> Result<Coord, CommandError> {
    let word = word.ok_or(CommandError::MissingCoordinates)?;
    word.parse().map_err(|_| CommandError::InvalidNumber(word.to_owned()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();

        let command = match name.as_str() {
            "r" | "reveal" => {
                let row = parse_coord(words.next())?;
                Command::Reveal((row, parse_coord(words.next())?))
            }
            "f" | "flag" => {
                let row = parse_coord(words.next())?;
                Command::Flag((row, parse_coord(words.next())?))
            }
            "n" | "new" => {
                let difficulty = words.next().map(str::parse::<Difficulty>).transpose()?;
                Command::NewGame(difficulty)
            }
            "d" | "difficulty" => {
                let difficulty = words.next().ok_or(GameError::UnknownDifficulty)?;
                Command::NewGame(Some(difficulty.parse::<Difficulty>()?))
            }
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name)),
        };

        match words.next() {
            Some(extra) => Err(CommandError::TrailingInput(extra.to_owned())),
            None => Ok(command),
        }
    }
}

pub const HELP: &str = "\
Commands:
  reveal <row> <col>   (r)  show a cell
  flag <row> <col>     (f)  place or remove a flag
  new [difficulty]     (n)  start over, optionally on another difficulty
  difficulty <name>    (d)  beginner, intermediate or expert
  help                 (h)  this text
  quit                 (q)  leave the game";
