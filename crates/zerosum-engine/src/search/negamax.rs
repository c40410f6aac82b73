//! Negamax: minimax folded onto one side's point of view.
//!
//! Scores are relative to the side to move and negated at every ply, so
//! every node maximizes. The values stored in the table are relative too:
//! never share a [`SearchStats`] between this and the absolute-scale
//! searches.

use tracing::trace;

use crate::game::ZeroSumGame;
use crate::search::node::{Node, enter, play, unplayable};
use crate::search::stats::SearchStats;
use crate::search::tt::Transposition;

/// Negamax search to `depth`.
///
/// Returns the value of the position for the side to move, using
/// [`ZeroSumGame::evaluate_relative`].
pub fn negamax<G: ZeroSumGame>(
    game: &mut G,
    stats: &mut SearchStats<G::Key, G::Move>,
    depth: u32,
) -> f64 {
    let (key, moves, static_score) = match enter(game, stats, depth, G::evaluate_relative) {
        Node::Resolved(score) => return score,
        Node::Expand {
            key,
            moves,
            static_score,
        } => (key, moves, static_score),
    };

    let mut best_score = f64::NEG_INFINITY;
    let mut best_move = moves[0].clone();
    let mut played = 0usize;

    for mv in &moves {
        if !play(game, mv) {
            continue;
        }
        played += 1;
        let score = -negamax(game, stats, depth - 1);
        game.take_back();
        trace!(depth, ?mv, score, "negamax child");

        if score > best_score {
            best_score = score;
            best_move = mv.clone();
        }
    }

    if played == 0 {
        return unplayable(stats, key, static_score, depth);
    }
    stats
        .table
        .store(key, Transposition::searched(best_score, depth, best_move, false));
    best_score
}
