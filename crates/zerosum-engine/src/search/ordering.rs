//! Move ordering: try the previously best move first.
//!
//! Only the hint is moved. The rest of the list keeps the order the game
//! generated, so the game's own ordering still drives most of the pruning.

use crate::game::GameMove;

/// Swap the move matching `hint` into slot 0.
///
/// Returns `true` if the hint was found in `moves`.
pub fn promote_hint<M: GameMove>(moves: &mut [M], hint: Option<&M>) -> bool {
    let Some(hint) = hint else {
        return false;
    };

    match moves.iter().position(|mv| mv.same_move(hint)) {
        Some(idx) => {
            moves.swap(0, idx);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Cell(u8);

    impl GameMove for Cell {
        fn same_move(&self, other: &Self) -> bool {
            self == other
        }
    }

    fn cells(raw: &[u8]) -> Vec<Cell> {
        raw.iter().copied().map(Cell).collect()
    }

    #[test]
    fn hint_swapped_to_front() {
        let mut moves = cells(&[1, 2, 5, 7]);
        assert!(promote_hint(&mut moves, Some(&Cell(5))));
        assert_eq!(moves, cells(&[5, 2, 1, 7]));
    }

    #[test]
    fn hint_already_first_is_unchanged() {
        let mut moves = cells(&[3, 4, 8]);
        assert!(promote_hint(&mut moves, Some(&Cell(3))));
        assert_eq!(moves, cells(&[3, 4, 8]));
    }

    #[test]
    fn missing_hint_leaves_order() {
        let mut moves = cells(&[0, 6, 2]);
        assert!(!promote_hint(&mut moves, Some(&Cell(4))));
        assert_eq!(moves, cells(&[0, 6, 2]));
    }

    #[test]
    fn no_hint_leaves_order() {
        let mut moves = cells(&[8, 1]);
        assert!(!promote_hint(&mut moves, None));
        assert_eq!(moves, cells(&[8, 1]));
    }

    #[test]
    fn empty_list_with_hint() {
        let mut moves: Vec<Cell> = Vec::new();
        assert!(!promote_hint(&mut moves, Some(&Cell(0))));
    }
}
