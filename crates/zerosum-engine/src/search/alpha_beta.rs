//! Fail-soft alpha-beta over the absolute scale, assisted by the
//! transposition table.
//!
//! A node is stored as [`EntryKind::Cut`](crate::search::tt::EntryKind::Cut)
//! only when it broke off with moves still untried. Running out of moves
//! after the window was narrowed still yields an exact entry.

use tracing::{debug, trace};

use crate::game::ZeroSumGame;
use crate::search::node::{Node, enter, play, unplayable};
use crate::search::stats::SearchStats;
use crate::search::tt::Transposition;

/// Score outside any reachable evaluation; the root window is `(-INF, INF)`.
pub const INF: f64 = f64::INFINITY;

/// Alpha-beta search to `depth` within the window `[alpha, beta]`.
///
/// Returns the best score found. At a cutoff this is the running best
/// (fail-soft), not the window edge.
pub fn alpha_beta<G: ZeroSumGame>(
    game: &mut G,
    stats: &mut SearchStats<G::Key, G::Move>,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
) -> f64 {
    let (key, moves, static_score) = match enter(game, stats, depth, G::evaluate) {
        Node::Resolved(score) => return score,
        Node::Expand {
            key,
            moves,
            static_score,
        } => (key, moves, static_score),
    };

    let maximizing = game.is_max_player_turn();
    let mut best_score = if maximizing { -INF } else { INF };
    let mut best_move = moves[0].clone();
    let mut played = 0usize;
    let mut cut = false;
    let last = moves.len() - 1;

    for (i, mv) in moves.iter().enumerate() {
        if !play(game, mv) {
            continue;
        }
        played += 1;
        let score = alpha_beta(game, stats, depth - 1, alpha, beta);
        game.take_back();
        trace!(depth, ?mv, score, alpha, beta, "alpha-beta child");

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = mv.clone();
            }
            alpha = alpha.max(best_score);
            if best_score >= beta {
                cut = i != last;
                debug!(?key, depth, best_score, beta, remaining = last - i, "beta cutoff");
                break;
            }
        } else {
            if score < best_score {
                best_score = score;
                best_move = mv.clone();
            }
            beta = beta.min(best_score);
            if best_score <= alpha {
                cut = i != last;
                debug!(?key, depth, best_score, alpha, remaining = last - i, "alpha cutoff");
                break;
            }
        }
    }

    if played == 0 {
        return unplayable(stats, key, static_score, depth);
    }
    stats
        .table
        .store(key, Transposition::searched(best_score, depth, best_move, cut));
    best_score
}
