//! Check and pin detection.
//!
//! Every function takes a grid snapshot rather than the live game so the
//! legality filter can run them against a scratch copy of the board.

use crate::game_state::chess_types::{Coordinate, PieceGrid, PieceKind, Player};
use crate::moves::piece_moves::pseudo_legal_moves;

/// Linear scan for `player`'s king. `None` once it has been captured.
#[inline]
pub fn find_king_coordinate(grid: &PieceGrid, player: Player) -> Option<Coordinate> {
    grid.king_of(player)
}

/// True if `player`'s king stands on a square some opposing piece could move
/// to. A side without a king is never in check.
pub fn is_king_in_check(grid: &PieceGrid, player: Player) -> bool {
    let Some(king) = find_king_coordinate(grid, player) else {
        return false;
    };
    is_square_attacked(grid, king, player.opposite())
}

pub fn is_square_attacked(grid: &PieceGrid, square: Coordinate, attacker: Player) -> bool {
    grid.pieces_of(attacker)
        .any(|(origin, piece)| pseudo_legal_moves(&piece, origin, grid).contains(&square))
}

/// Step that carries a piece from `origin` toward `destination`: the unit step
/// for rank, file and diagonal moves, the whole displacement for a knight jump.
pub fn move_direction(origin: Coordinate, destination: Coordinate) -> (i8, i8) {
    let dx = destination.x() - origin.x();
    let dy = destination.y() - origin.y();
    if dx == 0 || dy == 0 || dx.abs() == dy.abs() {
        (dx.signum(), dy.signum())
    } else {
        (dx, dy)
    }
}

/// Pin approximation: continue along the move's own direction past
/// `destination` on the unmodified grid and report whether the first piece met
/// is an enemy rook or queen. The king's position is not consulted.
pub fn is_pinned_piece(
    grid: &PieceGrid,
    origin: Coordinate,
    destination: Coordinate,
    mover: Player,
) -> bool {
    let (dx, dy) = move_direction(origin, destination);
    if (dx, dy) == (0, 0) {
        return false;
    }

    let mut current = destination;
    while let Some(next) = current.offset(dx, dy) {
        if let Some(piece) = grid.piece_at(next) {
            return piece.player != mover
                && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen);
        }
        current = next;
    }

    false
}
