//! Errors for move application and board parsing.

/// A move the board refuses to play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The target cell is not on the 3x3 board.
    #[error("cell {cell} is off the board")]
    CellOutOfRange {
        /// The requested cell index.
        cell: usize,
    },
    /// The target cell already holds a piece.
    #[error("cell {cell} is already occupied")]
    CellOccupied {
        /// The requested cell index.
        cell: usize,
    },
    /// A line is complete or the board is full.
    #[error("the game is already over")]
    GameOver,
    /// There is nothing to choose from.
    #[error("no legal moves are available")]
    NoLegalMoves,
}

/// Errors that occur when parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    /// The notation did not describe exactly nine cells.
    #[error("expected 9 cells, found {found}")]
    WrongCellCount {
        /// Number of cells found.
        found: usize,
    },
    /// An unrecognized character appeared among the cells.
    #[error("invalid cell character: '{character}'")]
    InvalidCell {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move suffix is not `x` or `o`.
    #[error("invalid side to move: \"{found}\"")]
    InvalidSide {
        /// The invalid suffix.
        found: String,
    },
    /// Piece counts that alternating play from an empty board cannot reach,
    /// so the side to move cannot be inferred.
    #[error("cannot infer side to move from {x} X and {o} O pieces")]
    ImpossiblePieceCount {
        /// Number of X pieces.
        x: usize,
        /// Number of O pieces.
        o: usize,
    },
}
