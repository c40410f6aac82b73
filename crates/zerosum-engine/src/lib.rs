//! Game-agnostic adversarial search: minimax, negamax, and alpha-beta with
//! a transposition table, over any game implementing [`ZeroSumGame`].

pub mod config;
pub mod error;
pub mod game;
pub mod search;

pub use config::SearchConfig;
pub use error::ParseAlgorithmError;
pub use game::{Evaluation, GameMove, ZeroSumGame};
pub use search::stats::SearchStats;
pub use search::tt::{EntryKind, Probe, Transposition, TranspositionTable};
pub use search::{Algorithm, SearchResult, calc_best_move, search};
