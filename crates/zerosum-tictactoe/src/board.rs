//! The 3x3 board, its rules, and its engine binding.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use zerosum_engine::{Evaluation, SearchConfig, SearchResult, ZeroSumGame, search};

use crate::error::BoardError;
use crate::game_move::Move;
use crate::piece::Piece;

/// Board width in cells.
pub const WIDTH: usize = 3;
/// Board height in cells.
pub const HEIGHT: usize = 3;
/// Number of cells.
pub const CELLS: usize = WIDTH * HEIGHT;

/// Every winning line, as cell indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [0, 3, 6],
    [0, 4, 8],
    [1, 4, 7],
    [2, 5, 8],
    [2, 4, 6],
    [3, 4, 5],
    [6, 7, 8],
];

/// Outcome of a position, from X's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// X completed a line.
    XWin,
    /// Board full with no line.
    Draw,
    /// O completed a line.
    XLoss,
    /// Game still in progress.
    Playing,
}

impl GameResult {
    /// True unless the game is still in progress.
    pub const fn is_over(self) -> bool {
        !matches!(self, GameResult::Playing)
    }
}

/// A tic-tac-toe position with its move history.
///
/// Cells are numbered 0..9 row-major from the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; CELLS],
    side_to_move: Piece,
    history: Vec<Move>,
}

impl Board {
    /// Empty board, X to move.
    pub fn new() -> Self {
        Self::from_cells([None; CELLS], Piece::X)
    }

    /// Board with the given cells and side to move, and no history.
    pub fn from_cells(cells: [Option<Piece>; CELLS], side_to_move: Piece) -> Self {
        Self {
            cells,
            side_to_move,
            history: Vec::new(),
        }
    }

    /// Piece on `cell`, if any. Out-of-range cells are empty.
    pub fn cell(&self, cell: usize) -> Option<Piece> {
        self.cells.get(cell).copied().flatten()
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Option<Piece>; CELLS] {
        &self.cells
    }

    /// The side about to move.
    pub fn side_to_move(&self) -> Piece {
        self.side_to_move
    }

    /// Moves played on this board, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of pieces of `piece` on the board.
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&c| c == Some(piece)).count()
    }

    /// Win, loss, draw, or still playing.
    ///
    /// Lines are checked before fullness, so a board completed by a winning
    /// move is a win, not a draw.
    pub fn check_result(&self) -> GameResult {
        for piece in Piece::ALL {
            let wins = LINES
                .iter()
                .any(|line| line.iter().all(|&cell| self.cells[cell] == Some(piece)));
            if wins {
                return match piece {
                    Piece::X => GameResult::XWin,
                    Piece::O => GameResult::XLoss,
                };
            }
        }

        if self.cells.iter().all(Option::is_some) {
            GameResult::Draw
        } else {
            GameResult::Playing
        }
    }

    /// A uniformly random legal move.
    ///
    /// # Errors
    ///
    /// [`BoardError::NoLegalMoves`] once the game is over.
    pub fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Move, BoardError> {
        self.legal_moves()
            .choose(rng)
            .copied()
            .ok_or(BoardError::NoLegalMoves)
    }

    /// The engine's choice for the side to move, searching to the end of
    /// the game with alpha-beta. `None` once the game is over.
    pub fn best_move(&mut self) -> Option<Move> {
        self.best_move_with(&SearchConfig::default()).best_move
    }

    /// Run the engine on this position with the given configuration.
    pub fn best_move_with(&mut self, config: &SearchConfig) -> SearchResult<Move> {
        let result = search(self, config);
        debug!(
            key = %self.position_key(),
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            "engine move"
        );
        result
    }

    fn validate(&self, mv: Move) -> Result<usize, BoardError> {
        let cell = mv.target();
        if cell >= CELLS {
            return Err(BoardError::CellOutOfRange { cell });
        }
        if self.cells[cell].is_some() {
            return Err(BoardError::CellOccupied { cell });
        }
        if self.check_result().is_over() {
            return Err(BoardError::GameOver);
        }
        Ok(cell)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl ZeroSumGame for Board {
    type Move = Move;
    type Key = String;
    type Error = BoardError;

    /// Empty cells in ascending order; none once the game is over.
    fn legal_moves(&self) -> Vec<Move> {
        if self.check_result().is_over() {
            return Vec::new();
        }
        (0..CELLS)
            .filter(|&cell| self.cells[cell].is_none())
            .map(|cell| Move::new(cell as u8))
            .collect()
    }

    fn make_move(&mut self, mv: &Move) -> Result<(), BoardError> {
        let cell = self.validate(*mv)?;
        self.cells[cell] = Some(self.side_to_move);
        self.side_to_move = !self.side_to_move;
        self.history.push(*mv);
        Ok(())
    }

    /// Undo the last move. Does nothing on a board with no history.
    fn take_back(&mut self) {
        let Some(last) = self.history.pop() else {
            return;
        };
        self.cells[last.target()] = None;
        self.side_to_move = !self.side_to_move;
    }

    /// +1 for an X win, -1 for an O win, 0 for a draw; 0 (not exact) while
    /// playing.
    fn evaluate(&self) -> Evaluation {
        match self.check_result() {
            GameResult::XWin => Evaluation::exact(1.0),
            GameResult::XLoss => Evaluation::exact(-1.0),
            GameResult::Draw => Evaluation::exact(0.0),
            GameResult::Playing => Evaluation::heuristic(0.0),
        }
    }

    fn is_max_player_turn(&self) -> bool {
        self.side_to_move == Piece::X
    }

    /// Rows joined by `|`, then the side to move: `"X . .|. O .|. . .|tX"`.
    fn position_key(&self) -> String {
        format!("{}|t{}", self.rows().join("|"), self.side_to_move)
    }
}
