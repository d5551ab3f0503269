use crate::game_state::chess_types::{Coordinate, PieceGrid, Player};
use crate::moves::piece_moves::trace_ray;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn rook_moves(player: Player, origin: Coordinate, grid: &PieceGrid, out: &mut Vec<Coordinate>) {
    for (dx, dy) in ROOK_DIRECTIONS {
        trace_ray(player, origin, dx, dy, grid, out);
    }
}
