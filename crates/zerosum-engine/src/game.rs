//! The capability contract a game must provide to be searched.
//!
//! The engine never looks inside a position or a move. Everything it needs
//! goes through [`ZeroSumGame`] and [`GameMove`].

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Neg;

/// A move of some concrete game.
///
/// Only equality is required: the engine holds on to a best move and later
/// looks for it again in a freshly generated move list.
pub trait GameMove: Clone + Debug {
    /// Return `true` if `self` and `other` denote the same move.
    fn same_move(&self, other: &Self) -> bool;
}

/// Result of evaluating a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// The game is over and `score` is final (win, loss, or draw).
    pub is_exact: bool,
    /// Score on the scale the caller agreed with the search variant.
    pub score: f64,
}

impl Evaluation {
    /// A concluded game whose score never changes under deeper search.
    pub const fn exact(score: f64) -> Self {
        Self {
            is_exact: true,
            score,
        }
    }

    /// A heuristic estimate of a game still in progress.
    pub const fn heuristic(score: f64) -> Self {
        Self {
            is_exact: false,
            score,
        }
    }
}

impl Neg for Evaluation {
    type Output = Evaluation;

    fn neg(self) -> Evaluation {
        Evaluation {
            is_exact: self.is_exact,
            score: -self.score,
        }
    }
}

/// A two-player, zero-sum, perfect-information game.
///
/// The state is mutated in place: [`make_move`](Self::make_move) and
/// [`take_back`](Self::take_back) must be exact inverses, so that after any
/// balanced sequence of calls the game is identical to where it started.
///
/// The order of [`legal_moves`](Self::legal_moves) matters for pruning:
/// the engine only promotes one remembered move to the front, everything
/// else is searched in the order the game produces it. Put likely-good
/// moves first.
pub trait ZeroSumGame {
    /// A move of this game.
    type Move: GameMove;
    /// Unique key for (board contents, side to move).
    type Key: Eq + Hash + Clone + Debug;
    /// Why a move was rejected.
    type Error: std::error::Error;

    /// Moves available to the side to move. Empty once the game is over.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play `mv` for the side to move.
    ///
    /// # Errors
    ///
    /// Returns an error if `mv` is not legal in the current position; the
    /// state is left untouched in that case.
    fn make_move(&mut self, mv: &Self::Move) -> Result<(), Self::Error>;

    /// Undo the most recent successful [`make_move`](Self::make_move).
    fn take_back(&mut self);

    /// Evaluate the position on the absolute scale: higher is better for
    /// the maximizing side, whoever is to move.
    fn evaluate(&self) -> Evaluation;

    /// Whether the side to move prefers the highest score.
    fn is_max_player_turn(&self) -> bool;

    /// Key identifying this exact position, including the side to move.
    ///
    /// Two positions with different continuations must never share a key;
    /// the engine trusts this blindly.
    fn position_key(&self) -> Self::Key;

    /// Evaluate the position relative to the side to move (positive means
    /// good for whoever is about to play). Used by negamax.
    fn evaluate_relative(&self) -> Evaluation {
        let eval = self.evaluate();
        if self.is_max_player_turn() { eval } else { -eval }
    }
}

#[cfg(test)]
mod tests {
    use super::Evaluation;

    #[test]
    fn negation_keeps_exact_flag() {
        let eval = -Evaluation::exact(1.0);
        assert!(eval.is_exact);
        assert_eq!(eval.score, -1.0);
    }

    #[test]
    fn heuristic_is_not_exact() {
        let eval = Evaluation::heuristic(0.25);
        assert!(!eval.is_exact);
        assert_eq!(eval.score, 0.25);
    }
}
