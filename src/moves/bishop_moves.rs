//! Bishop rays.

use crate::game_state::chess_types::{Coordinate, PieceGrid, Player};
use crate::moves::piece_moves::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub fn bishop_moves(player: Player, origin: Coordinate, grid: &PieceGrid, out: &mut Vec<Coordinate>) {
    for (dx, dy) in BISHOP_DIRECTIONS {
        trace_ray(player, origin, dx, dy, grid, out);
    }
}

#[cfg(test)]
mod tests {
    use super::bishop_moves;
    use crate::game_state::chess_types::{Coordinate, GameState, Piece, PieceKind, Player};

    fn at(x: i8, y: i8) -> Coordinate {
        Coordinate::new(x, y).expect("test coordinate should be on the board")
    }

    #[test]
    fn bishop_on_open_board_from_d4_has_thirteen_squares() {
        let mut game = GameState::new_empty();
        game.place(at(3, 4), Piece::new(PieceKind::Bishop, Player::Black));
        let mut out = Vec::new();
        bishop_moves(Player::Black, at(3, 4), &game.board, &mut out);
        assert_eq!(out.len(), 13);
    }

    #[test]
    fn bishop_blocker_stops_ray() {
        let mut game = GameState::new_empty();
        game.place(at(2, 7), Piece::new(PieceKind::Bishop, Player::White));
        game.place(at(4, 5), Piece::new(PieceKind::Knight, Player::Black));
        game.place(at(1, 6), Piece::new(PieceKind::Pawn, Player::White));

        let mut out = Vec::new();
        bishop_moves(Player::White, at(2, 7), &game.board, &mut out);

        assert!(out.contains(&at(3, 6)));
        assert!(out.contains(&at(4, 5)));
        assert!(!out.contains(&at(5, 4)));
        assert!(!out.contains(&at(1, 6)));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn starting_bishop_is_boxed_in() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        bishop_moves(Player::White, at(2, 7), &game.board, &mut out);
        assert!(out.is_empty());
    }
}
