use memory_match_core::{Coord, Coord2};
use thiserror::Error;

/// A line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Pick the card at `(row, col)`.
    Select(Coord2),
    Restart,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Nothing entered")]
    Empty,
    #[error("Unrecognized input {0:?}, type `help` for commands")]
    Unrecognized(String),
    #[error("No card at row {row}, column {col}, the grid is {side}x{side}")]
    OutOfRange { row: u32, col: u32, side: Coord },
}

pub const HELP: &str = "\
Commands:
  <row> <col>   flip the card at that row and column (zero-based)
  r, restart    shuffle and start over
  h, help       show this help
  q, quit       leave the game";

/// Parses one line, rejecting positions outside a `side`x`side` grid.
pub fn parse(line: &str, side: Coord) -> Result<Command, InputError> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => return Err(InputError::Empty),
        "r" | "restart" => return Ok(Command::Restart),
        "h" | "help" | "?" => return Ok(Command::Help),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Unrecognized(line.to_owned()));
    };
    let (Ok(row), Ok(col)) = (row.parse::<u32>(), col.parse::<u32>()) else {
        return Err(InputError::Unrecognized(line.to_owned()));
    };

    if row >= u32::from(side) || col >= u32::from(side) {
        return Err(InputError::OutOfRange { row, col, side });
    }
    // both are below side, which is a Coord
    Ok(Command::Select((row as Coord, col as Coord)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinates() {
        assert_eq!(parse("1 2", 4), Ok(Command::Select((1, 2))));
        assert_eq!(parse("  3,0 \n", 4), Ok(Command::Select((3, 0))));
        assert_eq!(parse("0, 0", 4), Ok(Command::Select((0, 0))));
    }

    #[test]
    fn parses_words() {
        assert_eq!(parse("r", 4), Ok(Command::Restart));
        assert_eq!(parse("RESTART", 4), Ok(Command::Restart));
        assert_eq!(parse("help", 4), Ok(Command::Help));
        assert_eq!(parse("q", 4), Ok(Command::Quit));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            parse("4 0", 4),
            Err(InputError::OutOfRange {
                row: 4,
                col: 0,
                side: 4
            })
        );
        assert!(matches!(
            parse("0 99999999999", 4),
            Err(InputError::Unrecognized(_))
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse("   ", 4), Err(InputError::Empty));
        assert!(matches!(parse("1", 4), Err(InputError::Unrecognized(_))));
        assert!(matches!(parse("1 2 3", 4), Err(InputError::Unrecognized(_))));
        assert!(matches!(parse("a b", 4), Err(InputError::Unrecognized(_))));
        assert!(matches!(parse("-1 0", 4), Err(InputError::Unrecognized(_))));
    }
}
