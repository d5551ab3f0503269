//! Legal move filtering.
//!
//! A candidate from the pseudo-legal generators is legal when, on a scratch
//! copy of the grid with the move applied, the mover's king is not attacked,
//! and (under `PinRule::RayHeuristic`) the pin approximation does not flag the
//! piece. The live game is only ever read here.

use log::trace;

use crate::game_state::chess_rules::PinRule;
use crate::game_state::chess_types::{Coordinate, GameState, Piece, Player};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_pinned_piece};
use crate::moves::piece_moves::pseudo_legal_moves;

/// A legal move for some piece, as produced by `all_legal_moves`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub from: Coordinate,
    pub to: Coordinate,
    pub piece: Piece,
}

/// Pseudo-legal destinations of `piece` standing on `origin`, filtered by
/// `is_move_legal`.
pub fn possible_moves(game_state: &GameState, piece: &Piece, origin: Coordinate) -> Vec<Coordinate> {
    pseudo_legal_moves(piece, origin, &game_state.board)
        .into_iter()
        .filter(|&destination| is_move_legal(game_state, origin, destination, piece.player))
        .collect()
}

/// Decides whether moving the piece on `origin` to `destination` is allowed
/// for `mover`. The origin must hold one of `mover`'s pieces and the
/// destination must not. The destination is not checked against the piece's
/// movement pattern.
pub fn is_move_legal(
    game_state: &GameState,
    origin: Coordinate,
    destination: Coordinate,
    mover: Player,
) -> bool {
    match game_state.board.piece_at(origin) {
        Some(piece) if piece.player == mover => {}
        _ => return false,
    }
    if origin == destination
        || game_state
            .board
            .piece_at(destination)
            .is_some_and(|occupant| occupant.player == mover)
    {
        return false;
    }

    let mut scratch = game_state.board;
    scratch.relocate(origin, destination);
    if is_king_in_check(&scratch, mover) {
        trace!("{origin} -> {destination} rejected: leaves {} king in check", mover.name());
        return false;
    }

    if game_state.config.pin_rule == PinRule::RayHeuristic
        && is_pinned_piece(&game_state.board, origin, destination, mover)
    {
        trace!("{origin} -> {destination} rejected: piece ruled pinned");
        return false;
    }

    true
}

/// Every legal move `player` has, scanning the board row by row.
pub fn all_legal_moves(game_state: &GameState, player: Player) -> Vec<LegalMove> {
    let mut legal = Vec::new();
    for (from, piece) in game_state.board.pieces_of(player) {
        legal.extend(
            possible_moves(game_state, &piece, from)
                .into_iter()
                .map(|to| LegalMove { from, to, piece }),
        );
    }
    legal
}

/// True when `player` has no legal move. Being in check is not required, so
/// a stalemated side also reports true.
pub fn in_checkmate(game_state: &GameState, player: Player) -> bool {
    !game_state.board.pieces_of(player).any(|(origin, piece)| {
        pseudo_legal_moves(&piece, origin, &game_state.board)
            .into_iter()
            .any(|destination| is_move_legal(game_state, origin, destination, player))
    })
}
