//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the text driver, tests and
//! diagnostics. Row 0 (rank 8) is printed first.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    render_with_targets(game_state, &[])
}

/// Like `render_game_state`, with `targets` marked: `•` on an empty target,
/// `×` on an occupied one.
pub fn render_with_targets(game_state: &GameState, targets: &[Coordinate]) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for y in 0..BOARD_SIZE {
        let rank = char::from(b'0' + (BOARD_SIZE - y) as u8);
        out.push(rank);
        out.push(' ');

        for x in 0..BOARD_SIZE {
            let cell = Coordinate::new(x, y).map(|coordinate| {
                (
                    game_state.piece_at(coordinate),
                    targets.contains(&coordinate),
                )
            });
            match cell {
                Some((Some(_), true)) => out.push('×'),
                Some((None, true)) => out.push('•'),
                Some((Some(piece), false)) => out.push(piece_to_unicode(&piece)),
                _ => out.push('·'),
            }

            if x < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: &Piece) -> char {
    match (piece.player, piece.kind) {
        (Player::White, PieceKind::Pawn) => '♙',
        (Player::White, PieceKind::Knight) => '♘',
        (Player::White, PieceKind::Bishop) => '♗',
        (Player::White, PieceKind::Rook) => '♖',
        (Player::White, PieceKind::Queen) => '♕',
        (Player::White, PieceKind::King) => '♔',
        (Player::Black, PieceKind::Pawn) => '♟',
        (Player::Black, PieceKind::Knight) => '♞',
        (Player::Black, PieceKind::Bishop) => '♝',
        (Player::Black, PieceKind::Rook) => '♜',
        (Player::Black, PieceKind::Queen) => '♛',
        (Player::Black, PieceKind::King) => '♚',
    }
}
