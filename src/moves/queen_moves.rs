use crate::game_state::chess_types::{Coordinate, PieceGrid, Player};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

/// Bishop rays followed by rook rays.
#[inline]
pub fn queen_moves(player: Player, origin: Coordinate, grid: &PieceGrid, out: &mut Vec<Coordinate>) {
    bishop_moves(player, origin, grid, out);
    rook_moves(player, origin, grid, out);
}
