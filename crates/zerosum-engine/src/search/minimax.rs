//! Plain minimax. No pruning: every legal move is searched at every node.

use tracing::trace;

use crate::game::ZeroSumGame;
use crate::search::node::{Node, enter, play, unplayable};
use crate::search::stats::SearchStats;
use crate::search::tt::Transposition;

/// Minimax search to `depth`, on the absolute scale.
///
/// Returns the value of the current position. The game is left exactly as
/// it was found.
pub fn minimax<G: ZeroSumGame>(
    game: &mut G,
    stats: &mut SearchStats<G::Key, G::Move>,
    depth: u32,
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
    let mut best_score = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
    let mut best_move = moves[0].clone();
    let mut played = 0usize;

    for mv in &moves {
        if !play(game, mv) {
            continue;
        }
        played += 1;
        let score = minimax(game, stats, depth - 1);
        game.take_back();
        trace!(depth, ?mv, score, "minimax child");

        let improved = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improved {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Evaluation;
    use crate::search::testing::{Edge, TreeGame};
    use crate::search::tt::EntryKind;

    #[test]
    fn textbook_tree_value() {
        let mut game = TreeGame::textbook();
        let mut stats = SearchStats::new();
        let score = minimax(&mut game, &mut stats, 2);
        assert_eq!(score, 3.0);
        assert_eq!(stats.nodes, 13);

        let root = stats.table.get(&0).unwrap();
        assert_eq!(root.best_move, Some(Edge(1)));
        assert_eq!(root.kind, EntryKind::Exact);
        assert_eq!(root.depth, 2);
    }

    #[test]
    fn no_entry_is_ever_a_bound() {
        let mut game = TreeGame::textbook();
        let mut stats = SearchStats::new();
        minimax(&mut game, &mut stats, 2);
        assert!(stats.table.iter().all(|(_, entry)| !entry.is_bound_only()));
    }

    #[test]
    fn minimizing_root_picks_least_child() {
        let mut game = TreeGame::textbook();
        game.make_move(&Edge(2)).unwrap();
        let mut stats = SearchStats::new();
        let score = minimax(&mut game, &mut stats, 1);
        assert_eq!(score, 1.0);
        assert_eq!(stats.table.get(&2).unwrap().best_move, Some(Edge(8)));
    }

    #[test]
    fn ties_keep_first_move() {
        let mut game = TreeGame::flat(&[0.0, 0.0, 0.0]);
        let mut stats = SearchStats::new();
        minimax(&mut game, &mut stats, 1);
        assert_eq!(stats.table.get(&0).unwrap().best_move, Some(Edge(1)));
    }

    #[test]
    fn node_with_every_move_refused_is_terminal() {
        let mut game = TreeGame::flat(&[3.0]);
        game.node_mut(0).eval = Evaluation::heuristic(-0.5);
        game.refused.push(1);
        let mut stats = SearchStats::new();
        assert_eq!(minimax(&mut game, &mut stats, 2), -0.5);

        let entry = stats.table.get(&0).unwrap();
        assert!(entry.is_terminal());
        assert!(entry.best_move.is_none());
    }

    #[test]
    fn game_restored_after_search() {
        let mut game = TreeGame::textbook();
        let mut stats = SearchStats::new();
        minimax(&mut game, &mut stats, 2);
        assert_eq!(game.position_key(), 0);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn deeper_query_searches_again() {
        let mut game = TreeGame::textbook();
        let mut stats = SearchStats::new();
        minimax(&mut game, &mut stats, 1);
        let shallow_nodes = stats.nodes;
        minimax(&mut game, &mut stats, 2);
        assert!(stats.nodes - shallow_nodes > 1, "depth-1 entry must not answer a depth-2 query");
        assert_eq!(stats.table.get(&0).unwrap().depth, 2);
    }

    #[test]
    fn same_depth_query_hits_table() {
        let mut game = TreeGame::textbook();
        let mut stats = SearchStats::new();
        let first = minimax(&mut game, &mut stats, 2);
        let nodes = stats.nodes;
        let second = minimax(&mut game, &mut stats, 2);
        assert_eq!(first, second);
        assert_eq!(stats.nodes, nodes + 1);
    }
}
