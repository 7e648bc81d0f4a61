use std::io::{self, Write};

use crate::board::{Square, BOARD_SIZE};
use crate::game::GameState;

const FILES: &str = "a b c d e f g h";

/// Draw the board with rank and file labels, the selection, and the turn line.
///
/// Empty squares are `--`; the selected square is wrapped in brackets.
pub fn print_board(out: &mut impl Write, game: &GameState, unicode: bool) -> io::Result<()> {
    let board = game.board();
    let header = FILES.replace(' ', if unicode { "  " } else { "   " });
    writeln!(out, "   {header}")?;

    for row in 0..BOARD_SIZE {
        let rank = BOARD_SIZE - row;
        write!(out, "{rank} ")?;
        for col in 0..BOARD_SIZE {
            let sq = Square::at(row, col);
            let cell = match (board.piece_at(sq), unicode) {
                (Some(piece), true) => piece.glyph().to_string(),
                (Some(piece), false) => piece.to_string(),
                (None, true) => "\u{00B7}".to_string(),
                (None, false) => "--".to_string(),
            };
            if game.selected() == Some(sq) {
                write!(out, "[{cell}]")?;
            } else {
                write!(out, " {cell} ")?;
            }
        }
        writeln!(out, "{rank}")?;
    }
    writeln!(out, "   {header}")?;
    print_turn(out, game)
}

/// The turn indicator, e.g. `White's Turn`.
pub fn print_turn(out: &mut impl Write, game: &GameState) -> io::Result<()> {
    writeln!(out, "{}'s Turn", game.turn())
}

pub fn print_destinations(out: &mut impl Write, from: Square, to: &[Square]) -> io::Result<()> {
    let list: Vec<String> = to.iter().map(Square::to_string).collect();
    writeln!(out, "moves {from} {}", list.join(" "))
}
