//! Command parsing.

use kibitz_core::{Color, Legality, Position, Square};

use crate::error::TermError;

/// A runtime setting changed with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOption {
    /// Show suggested moves after selecting a piece.
    Hints(bool),
    /// Which moves are screened for exposing the king.
    Legality(Legality),
    /// Reseed the random hint picker.
    Seed(u64),
}

/// A parsed command line.
#[derive(Debug)]
pub enum Command {
    /// `click e2` or `click 6 4` -- click a square by name or by (row, col).
    ///
    /// Coordinates are passed through unchecked; off-board clicks are
    /// handled by the session.
    Click { row: u8, col: u8 },
    /// `new` -- restart from the standard layout.
    New,
    /// `position <placement> [w|b]` -- load a board.
    Position { position: Position, turn: Color },
    /// `board` -- print the board.
    Board,
    /// `moves` -- list the moves of the selected piece.
    Moves,
    /// `status` -- report the side to move and its check status.
    Status,
    /// `set <option> <value>`.
    Set(ShellOption),
    /// `help` -- list commands.
    Help,
    /// `quit` -- leave the shell.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, TermError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "click" | "c" => parse_click(&tokens[1..]),
        "new" => Ok(Command::New),
        "position" => parse_position(&tokens[1..]),
        "board" => Ok(Command::Board),
        "moves" => Ok(Command::Moves),
        "status" => Ok(Command::Status),
        "set" => parse_set(&tokens[1..]),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse `click` arguments: a square name, or a row and a column.
fn parse_click(tokens: &[&str]) -> Result<Command, TermError> {
    match tokens {
        [] => Err(TermError::MissingArgument { command: "click" }),
        [name] => {
            let sq = Square::from_algebraic(name).ok_or_else(|| TermError::InvalidSquare {
                value: name.to_string(),
            })?;
            Ok(Command::Click {
                row: sq.row(),
                col: sq.col(),
            })
        }
        [row, col, ..] => {
            let invalid = || TermError::InvalidSquare {
                value: format!("{row} {col}"),
            };
            Ok(Command::Click {
                row: row.parse().map_err(|_| invalid())?,
                col: col.parse().map_err(|_| invalid())?,
            })
        }
    }
}

/// Parse `position` arguments: `<placement> [w|b]`, or `startpos`.
fn parse_position(tokens: &[&str]) -> Result<Command, TermError> {
    let Some(&placement) = tokens.first() else {
        return Err(TermError::MissingArgument { command: "position" });
    };

    let position = if placement == "startpos" {
        Position::starting_position()
    } else {
        placement.parse().map_err(|source| TermError::InvalidPlacement {
            placement: placement.to_string(),
            source,
        })?
    };

    let turn = match tokens.get(1) {
        None => Color::White,
        Some(code) => Color::from_code(code).ok_or_else(|| TermError::InvalidColor {
            value: code.to_string(),
        })?,
    };

    Ok(Command::Position { position, turn })
}

/// Parse `set <option> <value>`.
fn parse_set(tokens: &[&str]) -> Result<Command, TermError> {
    let (name, value) = match tokens {
        [name, value, ..] => (*name, *value),
        _ => return Err(TermError::MissingArgument { command: "set" }),
    };

    let invalid = |name: &'static str| TermError::InvalidOptionValue {
        name,
        value: value.to_string(),
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "hints" => ShellOption::Hints(parse_switch(value, "hints")?),
        "legality" => ShellOption::Legality(value.parse().map_err(|_| invalid("legality"))?),
        "seed" => ShellOption::Seed(value.parse().map_err(|_| invalid("seed"))?),
        _ => {
            return Err(TermError::UnknownOption {
                name: name.to_string(),
            });
        }
    };

    Ok(Command::Set(option))
}

/// Parse an on/off switch value.
fn parse_switch(value: &str, name: &'static str) -> Result<bool, TermError> {
    match value {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        _ => Err(TermError::InvalidOptionValue {
            name,
            value: value.to_string(),
        }),
    }
}
