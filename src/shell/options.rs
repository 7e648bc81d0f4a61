use std::fmt;
use std::io::{self, Write};

use crate::board::{Square, BOARD_SIZE};

/// A 650x650 pixel board divided into 8 squares
pub const DEFAULT_SQUARE_SIZE: u32 = 650 / BOARD_SIZE as u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    UnknownName { name: String },
    InvalidValue { name: &'static str, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownName { name } => write!(f, "No such option '{name}'"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option {name}")
            }
        }
    }
}

impl std::error::Error for OptionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    /// Pixel size of one square, used to map clicks to squares
    pub square_size: u32,
    /// Draw pieces with chess glyphs instead of `wP`-style tags
    pub unicode: bool,
    /// Redraw the board after every accepted move
    pub show_board: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        ShellOptions {
            square_size: DEFAULT_SQUARE_SIZE,
            unicode: false,
            show_board: true,
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, OptionError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(OptionError::InvalidValue {
            name,
            value: value.to_string(),
        }),
    }
}

impl ShellOptions {
    /// Apply `setoption name <name> value <value>`. Names are case-insensitive.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        match name.to_ascii_lowercase().as_str() {
            "squaresize" => {
                self.square_size = value
                    .parse::<u32>()
                    .ok()
                    .filter(|&size| size > 0)
                    .ok_or_else(|| OptionError::InvalidValue {
                        name: "SquareSize",
                        value: value.to_string(),
                    })?;
            }
            "unicode" => self.unicode = parse_bool("Unicode", value)?,
            "showboard" => self.show_board = parse_bool("ShowBoard", value)?,
            _ => {
                return Err(OptionError::UnknownName {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }

    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "option name SquareSize type spin default {} min 1 value {}",
            DEFAULT_SQUARE_SIZE, self.square_size
        )?;
        writeln!(
            out,
            "option name Unicode type check default false value {}",
            self.unicode
        )?;
        writeln!(
            out,
            "option name ShowBoard type check default true value {}",
            self.show_board
        )
    }

    /// Square under the pixel `(x, y)`, clamped to the board edge.
    #[must_use]
    pub fn square_at_pixel(&self, x: u32, y: u32) -> Square {
        let last = BOARD_SIZE - 1;
        let cell = |px: u32| ((px / self.square_size.max(1)) as usize).min(last);
        Square::at(cell(y), cell(x))
    }
}
