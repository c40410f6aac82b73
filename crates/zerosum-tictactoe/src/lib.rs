//! Tic-tac-toe, playable by the `zerosum` search engine.

mod board;
mod error;
mod game_move;
mod notation;
mod piece;

pub use board::{Board, CELLS, GameResult, HEIGHT, WIDTH};
pub use error::{BoardError, ParseBoardError};
pub use game_move::Move;
pub use piece::Piece;
pub use zerosum_engine::ZeroSumGame;
