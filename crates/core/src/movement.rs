//! Movement module - simulate, validate, commit
//!
//! A movement never holds on to the board. It simulates the active piece
//! after the requested transform by value, checks the copy against the board
//! bounds and the locked cells, and only then replaces the active piece.
//! Rejection is silent: an invalid move is routine, not an error.

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::types::TranslationDirection;

/// A candidate transform of the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Translate(TranslationDirection),
    /// Advance to the next rotation template; no wall kicks
    Rotate,
}

impl Movement {
    /// The active piece as it would be after this movement
    pub fn simulate(self, board: &Board) -> Tetromino {
        let active = board.active();
        match self {
            Movement::Translate(direction) => active.translated(direction),
            Movement::Rotate => active.rotated(),
        }
    }

    /// Check the simulated piece against the board without changing anything
    pub fn validate(self, board: &Board) -> bool {
        board.fits(&self.simulate(board))
    }

    /// Commit the movement if it is valid. Returns whether it was committed.
    pub fn execute(self, board: &mut Board) -> bool {
        let simulated = self.simulate(board);
        if !board.fits(&simulated) {
            return false;
        }
        board.replace_active(simulated);
        true
    }
}

/// Translate the active piece down until the next step is invalid.
///
/// Returns the number of rows travelled.
pub fn hard_drop(board: &mut Board) -> i32 {
    let mut rows = 0;
    while Movement::Translate(TranslationDirection::Down).execute(board) {
        rows += 1;
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PieceRandomizer;
    use crate::types::{Coordinate, PieceKind, Rgb};

    fn board_with(kind: PieceKind) -> Board {
        Board::with_randomizer(10, 20, PieceRandomizer::cycle(vec![kind])).unwrap()
    }

    #[test]
    fn translate_moves_origin() {
        let mut board = board_with(PieceKind::T);
        let before = board.active().origin();

        assert!(Movement::Translate(TranslationDirection::Left).execute(&mut board));
        assert_eq!(board.active().origin(), before + Coordinate::new(-1, 0));
    }

    #[test]
    fn translate_rejected_at_wall() {
        let mut board = board_with(PieceKind::O);
        board.replace_active(Tetromino::with_placement(
            PieceKind::O,
            Coordinate::new(0, 5),
            0,
        ));
        let before = board.active();

        assert!(!Movement::Translate(TranslationDirection::Left).validate(&board));
        assert!(!Movement::Translate(TranslationDirection::Left).execute(&mut board));
        assert_eq!(board.active(), before);
    }

    #[test]
    fn rotation_rejected_on_overlap() {
        let mut board = board_with(PieceKind::T);
        board.replace_active(Tetromino::with_placement(
            PieceKind::T,
            Coordinate::new(4, 5),
            0,
        ));
        // State 1 of T covers (5, 5); state 0 does not.
        board.locked_mut().add(Coordinate::new(5, 5), Rgb::new(1, 1, 1));
        let before = board.active();

        assert!(!Movement::Rotate.execute(&mut board));
        assert_eq!(board.active(), before);
    }

    #[test]
    fn rotation_advances_cycle() {
        let mut board = board_with(PieceKind::J);
        board.replace_active(Tetromino::with_placement(
            PieceKind::J,
            Coordinate::new(4, 5),
            0,
        ));
        assert!(Movement::Rotate.execute(&mut board));
        assert_eq!(board.active().cycle_index(), 1);
    }

    #[test]
    fn hard_drop_lands_on_floor() {
        let mut board = board_with(PieceKind::O);
        let rows = hard_drop(&mut board);
        assert_eq!(rows, 18);
        let lowest = board.active().cells().iter().map(|c| c.row).max();
        assert_eq!(lowest, Some(19));
        assert!(board.is_active_piece_grounded());
    }
}
