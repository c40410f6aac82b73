//! The two marks.

use std::fmt;
use std::ops::Not;

/// A mark on the board. X moves first and is the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    X,
    O,
}

impl Piece {
    /// Both pieces, X first.
    pub const ALL: [Piece; 2] = [Piece::X, Piece::O];

    /// The other side.
    #[inline]
    pub const fn flip(self) -> Piece {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }

    /// Upper-case board symbol.
    pub const fn symbol(self) -> char {
        match self {
            Piece::X => 'X',
            Piece::O => 'O',
        }
    }

    /// Parse a board symbol, case-insensitively.
    pub fn from_symbol(c: char) -> Option<Piece> {
        match c.to_ascii_uppercase() {
            'X' => Some(Piece::X),
            'O' => Some(Piece::O),
            _ => None,
        }
    }
}

impl Not for Piece {
    type Output = Piece;

    #[inline]
    fn not(self) -> Piece {
        self.flip()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
