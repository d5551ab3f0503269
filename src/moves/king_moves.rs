use crate::game_state::chess_types::{Coordinate, PieceGrid, Player};
use crate::moves::piece_moves::step_target;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, -1),
    (-1, 1),
    (1, 1),
    (-1, -1),
];

/// Adjacent squares not held by an own piece. Whether a square is attacked
/// is left to the legality filter.
pub fn king_moves(player: Player, origin: Coordinate, grid: &PieceGrid, out: &mut Vec<Coordinate>) {
    out.extend(
        KING_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| step_target(player, origin, dx, dy, grid)),
    );
}
