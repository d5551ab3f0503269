//! Core value types shared by the board, move generation and the driver.
//!
//! Pieces are small `Copy` records: the grid owns them cell by cell and a
//! scratch copy of the grid is a plain array copy.

pub use crate::game_state::coordinate::Coordinate;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::piece_grid::PieceGrid;
pub use crate::game_state::undo_state::Move;

/// A side of the board. White moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// First letter of a piece's display code.
    #[inline]
    pub const fn code_char(self) -> char {
        match self {
            Player::White => 'w',
            Player::Black => 'b',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Player::White => "White",
            Player::Black => "Black",
        }
    }
}

/// Piece kind (side is stored on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value. The king's value only marks it as decisive; it is
    /// never added into material totals.
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 8,
            PieceKind::King => 100,
        }
    }

    /// Second letter of a piece's display code.
    #[inline]
    pub const fn role_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A piece standing on (or just lifted from) the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub player: Player,
    /// Set once the piece has made its first move. Only pawns read it.
    pub moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, player: Player) -> Self {
        Self {
            kind,
            player,
            moved: false,
        }
    }

    /// Two-character display code such as `wK` or `bp`.
    pub fn code(&self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.player.code_char());
        code.push(self.kind.role_char());
        code
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.kind.value()
    }

    #[inline]
    pub fn is_opponent_of(&self, player: Player) -> bool {
        self.player != player
    }
}
