//! Per-search state threaded through every recursive call.

use std::hash::Hash;

use crate::game::GameMove;
use crate::search::tt::TranspositionTable;

/// Transposition table plus node counter for one top-level search.
#[derive(Debug, Clone)]
pub struct SearchStats<K, M> {
    /// Recursive calls made so far, cache hits included.
    pub nodes: u64,
    /// Positions searched so far.
    pub table: TranspositionTable<K, M>,
}

impl<K: Eq + Hash, M: GameMove> SearchStats<K, M> {
    /// Fresh statistics with an empty table.
    pub fn new() -> Self {
        Self {
            nodes: 0,
            table: TranspositionTable::new(),
        }
    }

    /// Fresh statistics with a table pre-sized for `depth`.
    pub fn for_depth(depth: u32) -> Self {
        Self {
            nodes: 0,
            table: TranspositionTable::for_depth(depth),
        }
    }

    /// Count one node.
    #[inline]
    pub fn visit(&mut self) {
        self.nodes += 1;
    }
}

impl<K: Eq + Hash, M: GameMove> Default for SearchStats<K, M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Noop;

    impl GameMove for Noop {
        fn same_move(&self, _other: &Self) -> bool {
            true
        }
    }

    #[test]
    fn fresh_stats_are_empty() {
        let stats: SearchStats<u32, Noop> = SearchStats::for_depth(4);
        assert_eq!(stats.nodes, 0);
        assert!(stats.table.is_empty());
    }

    #[test]
    fn oversized_depth_stays_within_preallocation_cap() {
        let stats: SearchStats<u32, Noop> = SearchStats::for_depth(999);
        assert!(stats.table.capacity() < 2 * crate::search::tt::MAX_PREALLOC);
    }

    #[test]
    fn visit_counts_nodes() {
        let mut stats: SearchStats<u32, Noop> = SearchStats::new();
        stats.visit();
        stats.visit();
        assert_eq!(stats.nodes, 2);
    }
}
