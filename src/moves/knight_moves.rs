use crate::game_state::chess_types::{Coordinate, PieceGrid, Player};
use crate::moves::piece_moves::step_target;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

pub fn knight_moves(player: Player, origin: Coordinate, grid: &PieceGrid, out: &mut Vec<Coordinate>) {
    out.extend(
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| step_target(player, origin, dx, dy, grid)),
    );
}
