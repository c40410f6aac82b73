//! Text form of a board.
//!
//! Nine cell characters, row-major: `X`, `O`, or one of `.`, `_`, `-` for
//! an empty cell. `/`, `|` and whitespace between cells are ignored. An
//! optional `:x` or `:o` suffix names the side to move; without it the side
//! is inferred from the piece counts (X moves first).
//!
//! ```text
//! XX./XO./O.O      X to move (3 X, 3 O)
//! X........:o      O to move
//! ```

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, CELLS, WIDTH};
use crate::error::ParseBoardError;
use crate::piece::Piece;

impl Board {
    /// Compact notation that parses back to the same position, e.g.
    /// `"XX./XO./O.O:x"`. History is not included.
    pub fn notation(&self) -> String {
        let rows: Vec<String> = self
            .cells()
            .chunks(WIDTH)
            .map(|row| row.iter().map(|&c| cell_char(c)).collect())
            .collect();
        format!(
            "{}:{}",
            rows.join("/"),
            self.side_to_move().symbol().to_ascii_lowercase()
        )
    }

    /// Rows with cells separated by spaces, `.` for empty.
    pub(crate) fn rows(&self) -> Vec<String> {
        self.cells()
            .chunks(WIDTH)
            .map(|row| {
                row.iter()
                    .map(|&c| cell_char(c).to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

fn cell_char(cell: Option<Piece>) -> char {
    cell.map_or('.', Piece::symbol)
}

fn infer_side(x: usize, o: usize) -> Result<Piece, ParseBoardError> {
    if x == o {
        Ok(Piece::X)
    } else if x == o + 1 {
        Ok(Piece::O)
    } else {
        Err(ParseBoardError::ImpossiblePieceCount { x, o })
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (placement, side) = match s.split_once(':') {
            Some((placement, side)) => (placement, Some(side.trim())),
            None => (s, None),
        };

        let mut cells = [None; CELLS];
        let mut found = 0;
        for c in placement.chars() {
            if c == '/' || c == '|' || c.is_whitespace() {
                continue;
            }
            let cell = match c {
                '.' | '_' | '-' => None,
                other => Some(
                    Piece::from_symbol(other)
                        .ok_or(ParseBoardError::InvalidCell { character: other })?,
                ),
            };
            if found < CELLS {
                cells[found] = cell;
            }
            found += 1;
        }
        if found != CELLS {
            return Err(ParseBoardError::WrongCellCount { found });
        }

        let side_to_move = match side {
            Some(side) => match side {
                "x" | "X" => Piece::X,
                "o" | "O" => Piece::O,
                other => {
                    return Err(ParseBoardError::InvalidSide {
                        found: other.to_string(),
                    });
                }
            },
            None => {
                let count = |piece: Piece| cells.iter().filter(|&&c| c == Some(piece)).count();
                infer_side(count(Piece::X), count(Piece::O))?
            }
        };

        Ok(Board::from_cells(cells, side_to_move))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows().join("\n"))
    }
}
