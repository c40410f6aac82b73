//! A tic-tac-toe move: the cell to mark.

use std::fmt;

use zerosum_engine::GameMove;

/// Place the side to move's piece on cell `target` (0..9, row-major).
///
/// Not validated on construction; [`Board`](crate::Board) rejects
/// out-of-range or occupied cells when the move is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u8);

impl Move {
    /// Create a move to `target`.
    pub const fn new(target: u8) -> Move {
        Move(target)
    }

    /// The cell index this move marks.
    pub const fn target(self) -> usize {
        self.0 as usize
    }
}

impl GameMove for Move {
    fn same_move(&self, other: &Self) -> bool {
        self == other
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_move_compares_targets() {
        assert!(Move::new(4).same_move(&Move::new(4)));
        assert!(!Move::new(4).same_move(&Move::new(5)));
    }

    #[test]
    fn display_is_cell_index() {
        assert_eq!(Move::new(7).to_string(), "7");
        assert_eq!(Move::new(7).target(), 7);
    }
}
