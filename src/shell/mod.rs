//! Line-oriented hot-seat shell.
//!
//! Reads one command per line, maps clicks to squares, hands moves to the
//! game and redraws. Replies start with `ok`, `ignored` or `error` so the
//! output stays easy to script against.

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::board::{Piece, Square};
use crate::game::{ClickOutcome, GameState};

pub mod command;
pub mod options;
pub mod print;

pub use command::{parse_command, CommandError, ShellCommand};
pub use options::{OptionError, ShellOptions};

const HELP: &str = "\
commands:
  click <x> <y>          click at pixel coordinates
  select <square>        click a square, e.g. select e2
  move <from><to>        play a move, e.g. move e2e4
  moves [<square>]       legal destinations of a square or the selection
  board                  draw the board
  placement              print the piece placement string
  load <placement> [w|b] set up a position
  new                    start a new game
  setoption name <N> value <V>
  options                list options
  quit";

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A game plus the shell's settings.
#[derive(Debug, Default)]
pub struct Shell {
    game: GameState,
    options: ShellOptions,
}

impl Shell {
    #[must_use]
    pub fn new(options: ShellOptions) -> Self {
        Shell {
            game: GameState::new(),
            options,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    /// Parse and run one input line.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        match parse_command(line) {
            Ok(Some(cmd)) => self.execute(cmd, out),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                debug!("bad input {line:?}: {e}");
                writeln!(out, "error {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, cmd: ShellCommand, out: &mut impl Write) -> io::Result<Flow> {
        match cmd {
            ShellCommand::Click { x, y } => {
                let square = self.options.square_at_pixel(x, y);
                self.click(square, out)?;
            }
            ShellCommand::Select(square) => self.click(square, out)?,
            ShellCommand::Move(mv) => match self.game.try_move(mv) {
                Ok(captured) => {
                    self.report_move(&mv.to_string(), captured, out)?;
                }
                Err(e) => writeln!(out, "error {e}")?,
            },
            ShellCommand::Moves(square) => match square.or(self.game.selected()) {
                Some(from) => {
                    let to = self.game.board().legal_destinations(from);
                    print::print_destinations(out, from, &to)?;
                }
                None => writeln!(out, "error Nothing selected")?,
            },
            ShellCommand::Board => self.draw(out)?,
            ShellCommand::Placement => {
                writeln!(
                    out,
                    "placement {} {}",
                    self.game.board().to_placement(),
                    self.game.turn().to_char()
                )?;
            }
            ShellCommand::Load { board, turn } => {
                self.game = GameState::from_board(board, turn);
                writeln!(out, "ok loaded")?;
                self.draw_if_enabled(out)?;
            }
            ShellCommand::New => {
                self.game = GameState::new();
                writeln!(out, "ok new game")?;
                self.draw_if_enabled(out)?;
            }
            ShellCommand::SetOption { name, value } => match self.options.set(&name, &value) {
                Ok(()) => writeln!(out, "ok {name} = {value}")?,
                Err(e) => {
                    warn!("setoption {name}: {e}");
                    writeln!(out, "error {e}")?;
                }
            },
            ShellCommand::Options => self.options.print(out)?,
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn click(&mut self, square: Square, out: &mut impl Write) -> io::Result<()> {
        match self.game.click(square) {
            ClickOutcome::Ignored => writeln!(out, "ignored {square}"),
            ClickOutcome::Selected(sq) => writeln!(out, "ok selected {sq}"),
            ClickOutcome::Deselected => writeln!(out, "ok deselected"),
            ClickOutcome::Moved { mv, captured } => {
                self.report_move(&mv.to_string(), captured, out)
            }
            ClickOutcome::Rejected(e) => writeln!(out, "error {e}"),
        }
    }

    fn report_move(
        &self,
        notation: &str,
        captured: Option<Piece>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        match captured {
            Some(piece) => writeln!(out, "ok moved {notation} captures {piece}")?,
            None => writeln!(out, "ok moved {notation}")?,
        }
        self.draw_if_enabled(out)
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        print::print_board(out, &self.game, self.options.unicode)
    }

    fn draw_if_enabled(&self, out: &mut impl Write) -> io::Result<()> {
        if self.options.show_board {
            self.draw(out)
        } else {
            print::print_turn(out, &self.game)
        }
    }
}

/// Drive a shell from `input` until `quit` or end of input.
pub fn run(shell: &mut Shell, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    shell.draw_if_enabled(out)?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        let flow = shell.handle_line(&line, out)?;
        out.flush()?;
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Run the shell on stdin/stdout.
pub fn run_stdio(options: ShellOptions) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(options);
    run(&mut shell, stdin.lock(), &mut stdout.lock())
}
