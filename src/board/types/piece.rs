//! Piece, kind and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl Kind {
    /// All piece kinds
    pub const ALL: [Kind; 6] = [
        Kind::Pawn,
        Kind::Rook,
        Kind::Knight,
        Kind::Bishop,
        Kind::Queen,
        Kind::King,
    ];

    /// Back rank order from file a to file h
    pub const BACK_RANK: [Kind; 8] = [
        Kind::Rook,
        Kind::Knight,
        Kind::Bishop,
        Kind::Queen,
        Kind::King,
        Kind::Bishop,
        Kind::Knight,
        Kind::Rook,
    ];

    /// Parse a kind from a letter (p, r, n, b, q, k), case-insensitive
    #[must_use]
    pub fn from_char(c: char) -> Option<Kind> {
        match c.to_ascii_lowercase() {
            'p' => Some(Kind::Pawn),
            'r' => Some(Kind::Rook),
            'n' => Some(Kind::Knight),
            'b' => Some(Kind::Bishop),
            'q' => Some(Kind::Queen),
            'k' => Some(Kind::King),
            _ => None,
        }
    }

    /// Convert kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Kind::Pawn => 'p',
            Kind::Rook => 'r',
            Kind::Knight => 'n',
            Kind::Bishop => 'b',
            Kind::Queen => 'q',
            Kind::King => 'k',
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Pawn => "Pawn",
            Kind::Rook => "Rook",
            Kind::Knight => "Knight",
            Kind::Bishop => "Bishop",
            Kind::Queen => "Queen",
            Kind::King => "King",
        };
        f.write_str(name)
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns start on (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_home_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row the other pieces start on (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn back_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Single-letter tag ('w' or 'b')
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on a square. Empty squares are `None` on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub kind: Kind,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: Kind) -> Self {
        Piece { color, kind }
    }

    /// Parse a FEN-style letter: uppercase is White, lowercase is Black
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = Kind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }

    /// FEN-style letter, uppercase for White
    #[inline]
    #[must_use]
    pub fn to_fen_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Unicode chess glyph
    #[must_use]
    pub const fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, Kind::King) => '\u{2654}',
            (Color::White, Kind::Queen) => '\u{2655}',
            (Color::White, Kind::Rook) => '\u{2656}',
            (Color::White, Kind::Bishop) => '\u{2657}',
            (Color::White, Kind::Knight) => '\u{2658}',
            (Color::White, Kind::Pawn) => '\u{2659}',
            (Color::Black, Kind::King) => '\u{265A}',
            (Color::Black, Kind::Queen) => '\u{265B}',
            (Color::Black, Kind::Rook) => '\u{265C}',
            (Color::Black, Kind::Bishop) => '\u{265D}',
            (Color::Black, Kind::Knight) => '\u{265E}',
            (Color::Black, Kind::Pawn) => '\u{265F}',
        }
    }
}

/// Two-letter tag such as `wP` or `bK`.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.color.to_char(),
            self.kind.to_char().to_ascii_uppercase()
        )
    }
}
