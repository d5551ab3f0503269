//! Pseudo-legal move generation entry point.
//!
//! Dispatches on the piece kind and collects candidate destinations that fit
//! the piece's movement pattern and the grid's occupancy. King safety is not
//! considered here; see `move_generation::legal_move_generator` for that.

use crate::game_state::chess_types::{Coordinate, Piece, PieceGrid, PieceKind, Player};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

pub fn pseudo_legal_moves(piece: &Piece, origin: Coordinate, grid: &PieceGrid) -> Vec<Coordinate> {
    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, origin, grid, &mut out),
        PieceKind::Knight => knight_moves(piece.player, origin, grid, &mut out),
        PieceKind::Bishop => bishop_moves(piece.player, origin, grid, &mut out),
        PieceKind::Rook => rook_moves(piece.player, origin, grid, &mut out),
        PieceKind::Queen => queen_moves(piece.player, origin, grid, &mut out),
        PieceKind::King => king_moves(piece.player, origin, grid, &mut out),
    }
    out
}

/// Single jump: the target counts if it is on the board and not held by
/// `player`'s own piece.
#[inline]
pub(crate) fn step_target(
    player: Player,
    origin: Coordinate,
    dx: i8,
    dy: i8,
    grid: &PieceGrid,
) -> Option<Coordinate> {
    let target = Coordinate::shift(player, origin, dx, dy)?;
    match grid.piece_at(target) {
        Some(occupant) if occupant.player == player => None,
        _ => Some(target),
    }
}

/// Walks one ray outward from `origin`. Empty squares are collected and the
/// walk continues; an enemy piece is collected and ends the walk; an own piece
/// or the board edge ends it without collecting.
pub(crate) fn trace_ray(
    player: Player,
    origin: Coordinate,
    dx: i8,
    dy: i8,
    grid: &PieceGrid,
    out: &mut Vec<Coordinate>,
) {
    let mut current = origin;
    while let Some(next) = Coordinate::shift(player, current, dx, dy) {
        match grid.piece_at(next) {
            None => out.push(next),
            Some(occupant) => {
                if occupant.player != player {
                    out.push(next);
                }
                break;
            }
        }
        current = next;
    }
}
