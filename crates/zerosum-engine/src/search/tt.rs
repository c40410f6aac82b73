//! Transposition table: search results cached per position.
//!
//! One table lives for exactly one top-level search. Every node writes a
//! single entry for its key once its children are done, replacing whatever
//! was there before.
//!
//! ## Probe policy
//!
//! | Stored entry                        | Outcome                  |
//! |-------------------------------------|--------------------------|
//! | terminal                            | score, any depth         |
//! | exact, `depth >= requested`         | score                    |
//! | exact, shallower                    | best move as a hint      |
//! | cut (bound only), or missing        | nothing                  |
//!
//! A cut entry is never used as a score, however deep it was searched.

use std::collections::HashMap;
use std::hash::Hash;

use crate::game::GameMove;

/// Largest table pre-allocation, in entries. Deeper searches grow the
/// table as it fills.
pub const MAX_PREALLOC: usize = 1 << 12;

/// What kind of value a [`Transposition`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Proven game-over score. Independent of depth, never stale.
    Terminal,
    /// Exact value of the node searched to the stored depth. Depth-0
    /// frontier entries (raw heuristic) are of this kind too.
    Exact,
    /// The search stopped early at a cutoff: score and move are a bound.
    Cut,
}

/// A cached search result for one position.
#[derive(Debug, Clone, PartialEq)]
pub struct Transposition<M> {
    /// Terminal, exact, or bound.
    pub kind: EntryKind,
    /// Search value of the node.
    pub score: f64,
    /// Remaining depth that produced `score`. Meaningless for terminal entries.
    pub depth: u32,
    /// Move that produced `score`. `None` for terminal and frontier entries.
    pub best_move: Option<M>,
}

impl<M> Transposition<M> {
    /// A proven game-over score.
    pub fn terminal(score: f64, depth: u32) -> Self {
        Self {
            kind: EntryKind::Terminal,
            score,
            depth,
            best_move: None,
        }
    }

    /// A depth-0 heuristic value. Any deeper search overrides it.
    pub fn frontier(score: f64) -> Self {
        Self {
            kind: EntryKind::Exact,
            score,
            depth: 0,
            best_move: None,
        }
    }

    /// The outcome of searching the node's children.
    ///
    /// `cut` marks a search that broke off before trying every move.
    pub fn searched(score: f64, depth: u32, best_move: M, cut: bool) -> Self {
        Self {
            kind: if cut { EntryKind::Cut } else { EntryKind::Exact },
            score,
            depth,
            best_move: Some(best_move),
        }
    }

    /// True if this is a proven game-over score.
    pub fn is_terminal(&self) -> bool {
        self.kind == EntryKind::Terminal
    }

    /// True if `score` and `best_move` are only a bound on the node's value.
    pub fn is_bound_only(&self) -> bool {
        self.kind == EntryKind::Cut
    }
}

/// Outcome of probing the table before searching a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Probe<M> {
    /// The stored score answers the query; do not search.
    Score(f64),
    /// Search the node, trying this move first.
    Hint(M),
    /// Nothing usable.
    Miss,
}

/// Position key to [`Transposition`] map for a single search.
#[derive(Debug, Clone)]
pub struct TranspositionTable<K, M> {
    entries: HashMap<K, Transposition<M>>,
}

impl<K: Eq + Hash, M: GameMove> TranspositionTable<K, M> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create an empty table with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Create an empty table sized for a search of the given depth.
    ///
    /// Reserves `2^depth` entries, capped at [`MAX_PREALLOC`].
    pub fn for_depth(depth: u32) -> Self {
        let capacity = 1usize.checked_shl(depth).unwrap_or(MAX_PREALLOC);
        Self::with_capacity(capacity.min(MAX_PREALLOC))
    }

    /// Apply the probe policy for a node about to be searched to `depth`.
    pub fn probe(&self, key: &K, depth: u32) -> Probe<M> {
        let Some(entry) = self.entries.get(key) else {
            return Probe::Miss;
        };

        match entry.kind {
            EntryKind::Terminal => Probe::Score(entry.score),
            EntryKind::Exact if entry.depth >= depth => Probe::Score(entry.score),
            EntryKind::Exact => match &entry.best_move {
                Some(mv) => Probe::Hint(mv.clone()),
                None => Probe::Miss,
            },
            EntryKind::Cut => Probe::Miss,
        }
    }

    /// Store the entry for `key`, replacing any previous one.
    pub fn store(&mut self, key: K, entry: Transposition<M>) {
        self.entries.insert(key, entry);
    }

    /// Look up the raw entry for `key`.
    pub fn get(&self, key: &K) -> Option<&Transposition<M>> {
        self.entries.get(key)
    }

    /// Number of stored positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries the table can hold before it reallocates.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// True if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all stored entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Transposition<M>)> {
        self.entries.iter()
    }
}

impl<K: Eq + Hash, M: GameMove> Default for TranspositionTable<K, M> {
    fn default() -> Self {
        Self::new()
    }
}
