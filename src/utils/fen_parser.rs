//! FEN-to-GameState parser.
//!
//! Reads the piece-placement field and, if present, the side-to-move field.
//! Castling, en-passant and clock fields are accepted but not interpreted.
//! Pawns found away from their home row are marked as having moved.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{BLACK_PAWN_ROW, BOARD_SIZE, WHITE_PAWN_ROW};
use crate::game_state::chess_types::*;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFENstringForm("missing board layout".to_owned()))?;

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state)?;

    if let Some(side_part) = parts.next() {
        game_state.side_to_move = parse_side_to_move(side_part)?;
    }

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), ChessErrors> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(ChessErrors::InvalidFENstringForm(format!(
            "board layout must contain 8 ranks, found {}",
            rows.len()
        )));
    }

    for (y, row_str) in (0i8..).zip(rows) {
        let mut x = 0i8;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFENtoken(ch));
                }
                x += empty_count as i8;
                if x > BOARD_SIZE {
                    return Err(ChessErrors::InvalidFENstringForm(format!(
                        "rank '{row_str}' has too many files"
                    )));
                }
                continue;
            }

            let (player, kind) = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFENtoken(ch))?;
            let coordinate = Coordinate::new(x, y).ok_or_else(|| {
                ChessErrors::InvalidFENstringForm(format!("rank '{row_str}' has too many files"))
            })?;

            let home_row = match player {
                Player::White => WHITE_PAWN_ROW,
                Player::Black => BLACK_PAWN_ROW,
            };
            let mut piece = Piece::new(kind, player);
            piece.moved = kind == PieceKind::Pawn && y != home_row;

            game_state.place(coordinate, piece);
            x += 1;
        }

        if x != BOARD_SIZE {
            return Err(ChessErrors::InvalidFENstringForm(format!(
                "rank '{row_str}' does not sum to 8 files"
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Player, ChessErrors> {
    match side_part {
        "w" => Ok(Player::White),
        "b" => Ok(Player::Black),
        _ => Err(ChessErrors::InvalidFENstringForm(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<(Player, PieceKind)> {
    let player = if ch.is_ascii_uppercase() {
        Player::White
    } else if ch.is_ascii_lowercase() {
        Player::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((player, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Coordinate, PieceKind, Player};
    use crate::utils::render_game_state::render_game_state;

    fn at(x: i8, y: i8) -> Coordinate {
        Coordinate::new(x, y).expect("test coordinate should be on the board")
    }

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.side_to_move, Player::White);
        let king = game_state.piece_at(at(4, 7)).expect("white king on e1");
        assert_eq!((king.kind, king.player), (PieceKind::King, Player::White));
    }

    #[test]
    fn side_field_is_optional_and_extra_fields_ignored() {
        let game = parse_fen("4k3/8/8/8/8/8/8/4K3").expect("placement-only FEN should parse");
        assert_eq!(game.side_to_move, Player::White);

        let game = parse_fen("4k3/8/8/8/8/8/8/4K3 b KQkq - 0 1").expect("full FEN should parse");
        assert_eq!(game.side_to_move, Player::Black);
    }

    #[test]
    fn pawns_off_home_row_count_as_moved() {
        let game = parse_fen("4k3/p7/8/8/4P3/8/1P6/4K3 w").expect("test FEN should parse");
        assert!(!game.piece_at(at(0, 1)).expect("black pawn on a7").moved);
        assert!(game.piece_at(at(4, 4)).expect("white pawn on e4").moved);
        assert!(!game.piece_at(at(1, 6)).expect("white pawn on b2").moved);
    }

    #[test]
    fn malformed_fen_is_rejected() {
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8 w"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
        assert!(matches!(
            parse_fen("9/8/8/8/8/8/8/8 w"),
            Err(ChessErrors::InvalidFENtoken('9'))
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/7x w"),
            Err(ChessErrors::InvalidFENtoken('x'))
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/pppppppp1 w"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/8 x"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
        assert!(matches!(parse_fen("   "), Err(ChessErrors::InvalidFENstringForm(_))));
    }
}
