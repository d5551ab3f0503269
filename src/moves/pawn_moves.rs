//! Pawn candidate moves.
//!
//! Pawns walk "forward" as seen from their own side, which is why every
//! displacement here goes through `Coordinate::shift`. Forward steps never
//! capture; diagonal steps only capture.

use crate::game_state::chess_types::{Coordinate, Piece, PieceGrid};

pub fn pawn_moves(pawn: &Piece, origin: Coordinate, grid: &PieceGrid, out: &mut Vec<Coordinate>) {
    let player = pawn.player;

    if let Some(one_step) = Coordinate::shift(player, origin, 0, 1) {
        if grid.is_empty(one_step) {
            out.push(one_step);

            if !pawn.moved {
                if let Some(two_step) = Coordinate::shift(player, origin, 0, 2) {
                    if grid.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for dx in [-1i8, 1i8] {
        let Some(target) = Coordinate::shift(player, origin, dx, 1) else {
            continue;
        };
        if grid.is_capturable(target, player) {
            out.push(target);
        }
    }
}
