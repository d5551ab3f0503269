//! GameState-to-FEN writer.
//!
//! Emits the piece-placement field and the side to move. Moved flags are not
//! encoded; `parse_fen` reconstructs them from pawn rows.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.side_to_move {
        Player::White => "w",
        Player::Black => "b",
    };

    format!("{board} {side_to_move}")
}

fn generate_board_field(grid: &PieceGrid) -> String {
    let mut out = String::new();

    for y in 0..BOARD_SIZE {
        let mut empty_count = 0u8;

        for x in 0..BOARD_SIZE {
            match Coordinate::new(x, y).and_then(|coordinate| grid.piece_at(coordinate)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(&piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if y < BOARD_SIZE - 1 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: &Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.player {
        Player::White => base.to_ascii_uppercase(),
        Player::Black => base,
    }
}
