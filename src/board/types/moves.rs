//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// A candidate relocation of whatever stands on `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// True when the move does not go anywhere
    #[inline]
    #[must_use]
    pub fn is_null(self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse coordinate notation such as `e2e4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }
        let (from, to) = s.split_at(2);
        let square = |part: &str| {
            part.parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: s.to_string(),
                })
        };
        Ok(Move::new(square(from)?, square(to)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate_move() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv.from, Square::at(6, 4));
        assert_eq!(mv.to, Square::at(4, 4));
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "e2e".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert!(matches!(
            "z2e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn test_null_move() {
        let sq = Square::at(3, 3);
        assert!(Move::new(sq, sq).is_null());
        assert!(!Move::new(sq, Square::at(3, 4)).is_null());
    }
}
