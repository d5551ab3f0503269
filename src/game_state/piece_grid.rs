//! The 8x8 occupancy grid.
//!
//! `PieceGrid` is plain `Copy` data. Legality probes copy it into a scratch
//! value, apply a hypothetical move there and drop it, so the live grid is
//! never aliased.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Coordinate, Piece, PieceKind, Player};

const SIZE: usize = BOARD_SIZE as usize;

/// Cells indexed `[row][column]`, i.e. `[y][x]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceGrid {
    squares: [[Option<Piece>; SIZE]; SIZE],
}

impl Default for PieceGrid {
    fn default() -> Self {
        Self {
            squares: [[None; SIZE]; SIZE],
        }
    }
}

impl PieceGrid {
    #[inline]
    pub fn piece_at(&self, coordinate: Coordinate) -> Option<Piece> {
        self.squares[coordinate.y() as usize][coordinate.x() as usize]
    }

    #[inline]
    pub fn set(&mut self, coordinate: Coordinate, piece: Option<Piece>) {
        self.squares[coordinate.y() as usize][coordinate.x() as usize] = piece;
    }

    /// Empties a cell and hands back its occupant.
    #[inline]
    pub fn take(&mut self, coordinate: Coordinate) -> Option<Piece> {
        self.squares[coordinate.y() as usize][coordinate.x() as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, coordinate: Coordinate) -> bool {
        self.piece_at(coordinate).is_none()
    }

    /// True when the cell holds a piece that `player` may capture.
    #[inline]
    pub fn is_capturable(&self, coordinate: Coordinate, player: Player) -> bool {
        self.piece_at(coordinate)
            .is_some_and(|piece| piece.is_opponent_of(player))
    }

    /// Moves whatever stands on `from` onto `to`, replacing the occupant of
    /// `to`. Returns the replaced piece. Does not touch the `moved` flag.
    pub fn relocate(&mut self, from: Coordinate, to: Coordinate) -> Option<Piece> {
        let moving = self.take(from);
        let captured = self.take(to);
        self.set(to, moving);
        captured
    }

    /// Occupied cells, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(|coordinate| {
            self.piece_at(coordinate).map(|piece| (coordinate, piece))
        })
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.player == player)
    }

    pub fn count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }

    /// Linear scan for `player`'s king.
    pub fn king_of(&self, player: Player) -> Option<Coordinate> {
        self.pieces_of(player)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(coordinate, _)| coordinate)
    }
}
