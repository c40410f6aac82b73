//! Steps shared by every search algorithm before children are visited.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, warn};

use crate::game::{Evaluation, GameMove, ZeroSumGame};
use crate::search::ordering::promote_hint;
use crate::search::stats::SearchStats;
use crate::search::tt::{Probe, Transposition};

/// What [`enter`] decided about a node.
pub(super) enum Node<K, M> {
    /// Value known without visiting children. Already stored if it needs to be.
    Resolved(f64),
    /// Children must be searched, in this order. `moves` is never empty.
    /// `static_score` is the node's own evaluation, used if no child can be
    /// played.
    Expand {
        key: K,
        moves: Vec<M>,
        static_score: f64,
    },
}

/// Count the node, probe the table, evaluate, and produce the ordered move
/// list if the node has to be expanded.
///
/// `evaluate` picks the scoring convention: absolute for minimax and
/// alpha-beta, side-relative for negamax.
pub(super) fn enter<G: ZeroSumGame>(
    game: &G,
    stats: &mut SearchStats<G::Key, G::Move>,
    depth: u32,
    evaluate: fn(&G) -> Evaluation,
) -> Node<G::Key, G::Move> {
    stats.visit();
    let key = game.position_key();

    let hint = match stats.table.probe(&key, depth) {
        Probe::Score(score) => return Node::Resolved(score),
        Probe::Hint(mv) => Some(mv),
        Probe::Miss => None,
    };

    let eval = evaluate(game);
    if eval.is_exact {
        stats.table.store(key, Transposition::terminal(eval.score, depth));
        return Node::Resolved(eval.score);
    }

    if depth == 0 {
        stats.table.store(key, Transposition::frontier(eval.score));
        return Node::Resolved(eval.score);
    }

    let mut moves = game.legal_moves();
    if moves.is_empty() {
        debug!(?key, score = eval.score, "no legal moves in a non-final position, scoring as terminal");
        stats.table.store(key, Transposition::terminal(eval.score, depth));
        return Node::Resolved(eval.score);
    }

    promote_hint(&mut moves, hint.as_ref());
    Node::Expand {
        key,
        moves,
        static_score: eval.score,
    }
}

/// Store and return the static score of a node whose every move was
/// refused by the game.
pub(super) fn unplayable<K: Eq + Hash + Debug, M: GameMove>(
    stats: &mut SearchStats<K, M>,
    key: K,
    static_score: f64,
    depth: u32,
) -> f64 {
    warn!(?key, score = static_score, "no move could be played, scoring as terminal");
    stats.table.store(key, Transposition::terminal(static_score, depth));
    static_score
}

/// Apply `mv`, logging and returning `false` if the game refuses it.
///
/// A refusal means the game generated a move it does not accept; the move
/// is skipped.
pub(super) fn play<G: ZeroSumGame>(game: &mut G, mv: &G::Move) -> bool {
    match game.make_move(mv) {
        Ok(()) => true,
        Err(err) => {
            warn!(?mv, error = %err, "game rejected one of its own legal moves");
            false
        }
    }
}
