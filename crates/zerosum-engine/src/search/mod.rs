//! Search algorithms and the best-move driver.

pub mod alpha_beta;
pub mod minimax;
pub mod negamax;
pub mod ordering;
pub mod stats;
pub mod tt;

mod node;
#[cfg(test)]
pub(crate) mod testing;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::config::SearchConfig;
use crate::error::ParseAlgorithmError;
use crate::game::ZeroSumGame;
use alpha_beta::{INF, alpha_beta};
use minimax::minimax;
use negamax::negamax;
use stats::SearchStats;

/// Which tree search the driver runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Exhaustive minimax. Baseline for checking the others.
    Minimax,
    /// Side-relative minimax; same answers, one code path for both sides.
    NegaMax,
    /// Pruned minimax with move-ordering hints from the table.
    #[default]
    AlphaBeta,
}

impl Algorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Minimax, Algorithm::NegaMax, Algorithm::AlphaBeta];

    /// Lower-case name used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::NegaMax => "negamax",
            Algorithm::AlphaBeta => "alphabeta",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == wanted)
            .ok_or_else(|| ParseAlgorithmError {
                name: s.to_string(),
            })
    }
}

/// Result of one top-level search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    /// Best move at the root. `None` if the root is terminal or has no moves.
    pub best_move: Option<M>,
    /// Value of the root on the absolute scale (maximizing side positive).
    pub score: f64,
    /// Nodes visited, table hits included.
    pub nodes: u64,
    /// Depth searched.
    pub depth: u32,
    /// The root position is already decided.
    pub is_terminal: bool,
    /// Positions stored in the table when the search finished.
    pub table_size: usize,
}

/// Find the best move for the side to move, searching `depth` plies with
/// alpha-beta.
///
/// The table lives for this call only. `game` is returned to its original
/// state.
pub fn calc_best_move<G: ZeroSumGame>(game: &mut G, depth: u32) -> SearchResult<G::Move> {
    run(game, depth, Algorithm::AlphaBeta)
}

/// Like [`calc_best_move`], with depth and algorithm taken from `config`.
pub fn search<G: ZeroSumGame>(game: &mut G, config: &SearchConfig) -> SearchResult<G::Move> {
    let depth = config.resolve_depth(game);
    run(game, depth, config.algorithm)
}

fn run<G: ZeroSumGame>(game: &mut G, depth: u32, algorithm: Algorithm) -> SearchResult<G::Move> {
    let mut stats = SearchStats::for_depth(depth);

    let returned = match algorithm {
        Algorithm::Minimax => minimax(game, &mut stats, depth),
        Algorithm::NegaMax => negamax(game, &mut stats, depth),
        Algorithm::AlphaBeta => alpha_beta(game, &mut stats, depth, -INF, INF),
    };

    let root = stats.table.get(&game.position_key());
    let mut score = root.map_or(returned, |entry| entry.score);
    // Negamax scores are relative to the side to move.
    if algorithm == Algorithm::NegaMax && !game.is_max_player_turn() {
        score = -score;
    }

    let result = SearchResult {
        best_move: root.and_then(|entry| entry.best_move.clone()),
        score,
        nodes: stats.nodes,
        depth,
        is_terminal: root.is_some_and(|entry| entry.is_terminal()),
        table_size: stats.table.len(),
    };

    debug!(
        %algorithm,
        depth,
        score,
        nodes = result.nodes,
        entries = result.table_size,
        best_move = ?result.best_move,
        "search complete"
    );
    result
}
