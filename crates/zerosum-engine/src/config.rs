//! Search configuration.

use crate::game::ZeroSumGame;
use crate::search::Algorithm;

/// Knobs for one call to [`search`](crate::search::search).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    /// Plies to search. `None` searches to the end of the game.
    pub depth: Option<u32>,
    /// Tree search to run.
    pub algorithm: Algorithm,
}

impl SearchConfig {
    /// Alpha-beta to the end of the game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the search to `depth` plies.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Use `algorithm`.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Depth to search in `game`.
    ///
    /// Without an explicit depth this is the number of legal moves at the
    /// root, which covers the rest of any game where each move fills one
    /// of a shrinking set of slots (tic-tac-toe, connect-four, ...). Games
    /// that can last longer should always set a depth.
    pub fn resolve_depth<G: ZeroSumGame>(&self, game: &G) -> u32 {
        self.depth
            .unwrap_or_else(|| u32::try_from(game.legal_moves().len()).unwrap_or(u32::MAX))
    }
}
