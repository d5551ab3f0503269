//! Move application, validated play and undo.
//!
//! `apply_move` is the raw mutation and trusts its caller. `play_move` is the
//! guarded path front-ends should use: it checks turn, occupancy and legality,
//! then applies the move and records it for `undo_last_move`.

use log::{debug, info};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Coordinate, GameState, Move, Piece, PieceKind};
use crate::game_state::game_state::GameStatus;
use crate::move_generation::legal_move_generator::possible_moves;

/// Moves `moving_piece` from `origin` to `destination`, capturing whatever
/// stands there, marks the piece as moved, hands the turn over and records
/// the move for `undo_last_move`. Capturing a king ends the game in the
/// mover's favor.
///
/// No legality check is made; gate calls behind `possible_moves` or
/// `is_move_legal`.
pub fn apply_move(
    game_state: &mut GameState,
    origin: Coordinate,
    destination: Coordinate,
    moving_piece: Piece,
) -> Move {
    let captured_piece = game_state.board.take(destination);
    if let Some(captured) = captured_piece {
        if captured.kind == PieceKind::King {
            info!(
                "{} king captured on {destination}, {} wins",
                captured.player.name(),
                moving_piece.player.name()
            );
            game_state.status = GameStatus::Finished {
                winner: moving_piece.player,
            };
        }
    }

    game_state.board.take(origin);
    game_state.board.set(
        destination,
        Some(Piece {
            moved: true,
            ..moving_piece
        }),
    );
    game_state.advance_turn();

    let record = Move {
        old_square: origin,
        new_square: destination,
        moving_piece,
        captured_piece,
    };
    game_state.history.push(record);

    debug!("{} {origin} -> {destination}", moving_piece.code());
    record
}

/// Validated move for the side to move. Leaves the game untouched on error.
pub fn play_move(
    game_state: &mut GameState,
    origin: Coordinate,
    destination: Coordinate,
) -> Result<Move, ChessErrors> {
    if !game_state.playable() {
        return Err(ChessErrors::GameIsOver);
    }

    let piece = game_state
        .piece_at(origin)
        .ok_or(ChessErrors::EmptySquare(origin))?;

    if piece.player != game_state.side_to_move {
        return Err(ChessErrors::NotYourTurn {
            expected: game_state.side_to_move,
            found: piece.player,
        });
    }

    if !possible_moves(game_state, &piece, origin).contains(&destination) {
        debug!("{} {origin} -> {destination} refused", piece.code());
        return Err(ChessErrors::IllegalMove {
            from: origin,
            to: destination,
        });
    }

    Ok(apply_move(game_state, origin, destination, piece))
}

/// Takes back the most recently applied move. The moving piece returns with its
/// old `moved` flag, the captured piece reappears and a finished game resumes.
pub fn undo_last_move(game_state: &mut GameState) -> Result<Move, ChessErrors> {
    let record = game_state.history.pop().ok_or(ChessErrors::NothingToUndo)?;

    game_state
        .board
        .set(record.old_square, Some(record.moving_piece));
    game_state.board.set(record.new_square, record.captured_piece);
    game_state.side_to_move = record.moving_piece.player;
    game_state.status = GameStatus::InProgress;

    debug!(
        "undo {} {} -> {}",
        record.moving_piece.code(),
        record.old_square,
        record.new_square
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::{apply_move, play_move, undo_last_move};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{Coordinate, GameState, Piece, PieceKind, Player};
    use crate::move_generation::legal_move_generator::possible_moves;

    fn at(x: i8, y: i8) -> Coordinate {
        Coordinate::new(x, y).expect("test coordinate should be on the board")
    }

    #[test]
    fn double_step_marks_pawn_moved() {
        let mut game = GameState::new_game();
        let pawn = game.piece_at(at(6, 6)).expect("white pawn should start on g2");
        assert!(possible_moves(&game, &pawn, at(6, 6)).contains(&at(6, 4)));

        play_move(&mut game, at(6, 6), at(6, 4)).expect("double step should be legal");

        let pawn = game.piece_at(at(6, 4)).expect("pawn should have landed");
        assert!(pawn.moved);
        assert!(game.piece_at(at(6, 6)).is_none());
        assert_eq!(possible_moves(&game, &pawn, at(6, 4)), vec![at(6, 3)]);
    }

    #[test]
    fn diagonal_slots_follow_occupancy_after_double_step() {
        let mut game = GameState::new_game();
        play_move(&mut game, at(6, 6), at(6, 4)).expect("white double step should be legal");
        play_move(&mut game, at(5, 1), at(5, 3)).expect("black double step should be legal");

        let pawn = game.piece_at(at(6, 4)).expect("white pawn should be on g4");
        let mut moves = possible_moves(&game, &pawn, at(6, 4));
        moves.sort();
        assert_eq!(moves, vec![at(5, 3), at(6, 3)]);
    }

    #[test]
    fn apply_move_flips_turn() {
        let mut game = GameState::new_game();
        let knight = game.piece_at(at(1, 7)).expect("knight should start on b1");
        apply_move(&mut game, at(1, 7), at(2, 5), knight);
        assert_eq!(game.current_turn(), Player::Black);
        assert!(game.playable());
    }

    #[test]
    fn raw_apply_is_recorded_and_undoable() {
        let mut game = GameState::new_game();
        play_move(&mut game, at(4, 6), at(4, 4)).expect("e4 should be legal");
        let knight = game.piece_at(at(6, 0)).expect("knight should start on g8");

        let record = apply_move(&mut game, at(6, 0), at(5, 2), knight);

        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history().last(), Some(&record));
        undo_last_move(&mut game).expect("knight move should undo");
        assert_eq!(game.piece_at(at(6, 0)), Some(knight));
        assert!(game.piece_at(at(5, 2)).is_none());
        assert!(game.piece_at(at(4, 4)).is_some());
        assert_eq!(game.current_turn(), Player::Black);
    }

    #[test]
    fn capturing_king_finishes_game_for_mover() {
        let mut game = GameState::new_empty();
        game.place(at(4, 0), Piece::new(PieceKind::King, Player::Black));
        game.place(at(4, 7), Piece::new(PieceKind::Rook, Player::White));
        game.place(at(0, 7), Piece::new(PieceKind::King, Player::White));

        let rook = game.piece_at(at(4, 7)).expect("rook should be placed");
        apply_move(&mut game, at(4, 7), at(4, 0), rook);

        assert!(game.white_won());
        assert!(!game.black_won());
        assert!(!game.playable());
        assert_eq!(game.winner(), Some(Player::White));
        assert_eq!(
            play_move(&mut game, at(0, 7), at(0, 6)),
            Err(ChessErrors::GameIsOver)
        );
    }

    #[test]
    fn black_capture_sets_only_black_flag() {
        let mut game = GameState::new_empty();
        game.place(at(4, 7), Piece::new(PieceKind::King, Player::White));
        game.place(at(3, 6), Piece::new(PieceKind::Pawn, Player::Black));
        game.side_to_move = Player::Black;

        play_move(&mut game, at(3, 6), at(4, 7)).expect("pawn capture should be legal");

        assert!(game.black_won());
        assert!(!game.white_won());
        assert!(!game.playable());
    }

    #[test]
    fn play_move_rejects_bad_requests_without_mutation() {
        let mut game = GameState::new_game();
        let before = game.board;

        assert_eq!(
            play_move(&mut game, at(4, 4), at(4, 3)),
            Err(ChessErrors::EmptySquare(at(4, 4)))
        );
        assert_eq!(
            play_move(&mut game, at(4, 1), at(4, 3)),
            Err(ChessErrors::NotYourTurn {
                expected: Player::White,
                found: Player::Black
            })
        );
        assert_eq!(
            play_move(&mut game, at(4, 6), at(4, 3)),
            Err(ChessErrors::IllegalMove {
                from: at(4, 6),
                to: at(4, 3)
            })
        );
        assert_eq!(game.board, before);
        assert!(game.history().is_empty());
        assert_eq!(game.current_turn(), Player::White);
    }

    #[test]
    fn undo_restores_capture_flags_and_turn() {
        let mut game = GameState::new_empty();
        game.place(at(4, 0), Piece::new(PieceKind::King, Player::Black));
        game.place(at(4, 1), Piece::new(PieceKind::Queen, Player::White));
        game.place(at(4, 7), Piece::new(PieceKind::King, Player::White));

        let record = play_move(&mut game, at(4, 1), at(4, 0)).expect("king capture should be legal");
        assert!(record.is_capture());
        assert!(game.white_won());

        let undone = undo_last_move(&mut game).expect("one move to undo");
        assert_eq!(undone, record);
        assert!(game.playable());
        assert_eq!(game.current_turn(), Player::White);
        assert_eq!(
            game.piece_at(at(4, 0)),
            Some(Piece::new(PieceKind::King, Player::Black))
        );
        let queen = game.piece_at(at(4, 1)).expect("queen should be back");
        assert!(!queen.moved);

        assert_eq!(undo_last_move(&mut game), Err(ChessErrors::NothingToUndo));
    }

    #[test]
    fn undo_restores_pawn_double_step() {
        let mut game = GameState::new_game();
        play_move(&mut game, at(4, 6), at(4, 4)).expect("e4 should be legal");
        undo_last_move(&mut game).expect("e4 should undo");

        assert_eq!(game.board, GameState::new_game().board);
        let pawn = game.piece_at(at(4, 6)).expect("pawn should be back on e2");
        assert_eq!(possible_moves(&game, &pawn, at(4, 6)).len(), 2);
    }
}
