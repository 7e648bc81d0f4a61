use std::fmt;

use crate::board::{Board, Color, Move, MoveParseError, PlacementError, Square, SquareError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Pointer click at pixel coordinates
    Click { x: u32, y: u32 },
    /// Click on a square given in algebraic notation
    Select(Square),
    Move(Move),
    /// Legal destinations of the named square, or of the selection
    Moves(Option<Square>),
    Board,
    Placement,
    Load { board: Board, turn: Color },
    New,
    SetOption { name: String, value: String },
    Options,
    Help,
    Quit,
}

/// Error type for command line parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown { command: String },
    MissingArgument { command: &'static str, argument: &'static str },
    InvalidNumber { value: String },
    InvalidColor { value: String },
    Square(SquareError),
    Move(MoveParseError),
    Placement(PlacementError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown { command } => write!(f, "Unknown command '{command}'"),
            CommandError::MissingArgument { command, argument } => {
                write!(f, "'{command}' needs <{argument}>")
            }
            CommandError::InvalidNumber { value } => write!(f, "Invalid number '{value}'"),
            CommandError::InvalidColor { value } => {
                write!(f, "Invalid side to move '{value}', expected 'w' or 'b'")
            }
            CommandError::Square(e) => write!(f, "{e}"),
            CommandError::Move(e) => write!(f, "{e}"),
            CommandError::Placement(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Square(e) => Some(e),
            CommandError::Move(e) => Some(e),
            CommandError::Placement(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SquareError> for CommandError {
    fn from(e: SquareError) -> Self {
        CommandError::Square(e)
    }
}

impl From<MoveParseError> for CommandError {
    fn from(e: MoveParseError) -> Self {
        CommandError::Move(e)
    }
}

impl From<PlacementError> for CommandError {
    fn from(e: PlacementError) -> Self {
        CommandError::Placement(e)
    }
}

fn required<'a>(
    parts: &[&'a str],
    idx: usize,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    parts
        .get(idx)
        .copied()
        .ok_or(CommandError::MissingArgument { command, argument })
}

fn pixel(value: &str) -> Result<u32, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        value: value.to_string(),
    })
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return Ok(None);
    };

    let cmd = match head {
        "click" => ShellCommand::Click {
            x: pixel(required(&parts, 1, "click", "x")?)?,
            y: pixel(required(&parts, 2, "click", "y")?)?,
        },
        "select" => ShellCommand::Select(required(&parts, 1, "select", "square")?.parse()?),
        "move" => ShellCommand::Move(required(&parts, 1, "move", "move")?.parse()?),
        "moves" => ShellCommand::Moves(parts.get(1).map(|s| s.parse::<Square>()).transpose()?),
        "board" => ShellCommand::Board,
        "placement" => ShellCommand::Placement,
        "load" => {
            let board = Board::try_from_placement(required(&parts, 1, "load", "placement")?)?;
            let turn = match parts.get(2).copied() {
                None | Some("w") => Color::White,
                Some("b") => Color::Black,
                Some(other) => {
                    return Err(CommandError::InvalidColor {
                        value: other.to_string(),
                    })
                }
            };
            ShellCommand::Load { board, turn }
        }
        "new" => ShellCommand::New,
        "setoption" => parse_setoption(&parts)?,
        "options" => ShellCommand::Options,
        "help" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => {
            return Err(CommandError::Unknown {
                command: head.to_string(),
            })
        }
    };

    Ok(Some(cmd))
}

/// `setoption name <Name> value <v>`; names and values may not contain spaces.
fn parse_setoption(parts: &[&str]) -> Result<ShellCommand, CommandError> {
    let position = |key: &str| parts.iter().position(|p| *p == key);
    let name = position("name")
        .and_then(|i| parts.get(i + 1))
        .ok_or(CommandError::MissingArgument {
            command: "setoption",
            argument: "name",
        })?;
    let value = position("value")
        .and_then(|i| parts.get(i + 1))
        .ok_or(CommandError::MissingArgument {
            command: "setoption",
            argument: "value",
        })?;
    Ok(ShellCommand::SetOption {
        name: (*name).to_string(),
        value: (*value).to_string(),
    })
}
