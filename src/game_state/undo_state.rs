//! History record for applied moves.

use crate::game_state::chess_types::{Coordinate, Piece};

/// Record of one applied move, kept on the history stack for undo.
///
/// `moving_piece` is the piece as it stood before the move, so its `moved`
/// flag can be restored exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub old_square: Coordinate,
    pub new_square: Coordinate,
    pub moving_piece: Piece,
    pub captured_piece: Option<Piece>,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}
