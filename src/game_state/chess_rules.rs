//! Canonical rule constants and rule toggles.
//!
//! Board geometry, the starting layout and the knobs that change how move
//! legality is decided all live here so setup code and tests share one source.

use crate::game_state::chess_types::PieceKind;

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 8;

/// Back-rank order, file `a` (x = 0) to file `h` (x = 7), identical for both sides.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Rows holding each side's back rank and pawns. Row 0 is the top of the
/// board as rendered.
pub const BLACK_BACK_ROW: i8 = 0;
pub const BLACK_PAWN_ROW: i8 = 1;
pub const WHITE_PAWN_ROW: i8 = 6;
pub const WHITE_BACK_ROW: i8 = 7;

/// Starting position as FEN placement plus side to move.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// How legality treats pieces standing in front of an enemy line piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinRule {
    /// After the king-safety probe, also refuse a move when the first piece
    /// beyond the destination, along the move's direction, is an enemy rook
    /// or queen.
    #[default]
    RayHeuristic,
    /// Legality is decided by the king-safety probe alone.
    KingSafetyOnly,
}

/// Rule toggles for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RulesConfig {
    pub pin_rule: PinRule,
}

impl RulesConfig {
    pub fn with_pin_rule(mut self, pin_rule: PinRule) -> Self {
        self.pin_rule = pin_rule;
        self
    }
}
