//! Live game state.
//!
//! `GameState` owns the piece grid, the side to move, the win state, the rule
//! toggles and the history of validated moves. The query/mutation surface used
//! by front-ends is collected here; the algorithms themselves live in
//! `move_generation` and are delegated to.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{
    RulesConfig, BACK_RANK_ORDER, BLACK_BACK_ROW, BLACK_PAWN_ROW, WHITE_BACK_ROW, WHITE_PAWN_ROW,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, play_move, undo_last_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    all_legal_moves, in_checkmate, is_move_legal, possible_moves, LegalMove,
};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Progress of a game. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished { winner: Player },
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: PieceGrid,
    pub side_to_move: Player,
    pub status: GameStatus,
    pub config: RulesConfig,
    /// Applied moves, oldest first.
    pub history: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: PieceGrid::default(),
            side_to_move: Player::White,
            status: GameStatus::InProgress,
            config: RulesConfig::default(),
            history: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board, White to move.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position with default rules.
    pub fn new_game() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Standard starting position with custom rules.
    pub fn with_config(config: RulesConfig) -> Self {
        let mut game_state = Self {
            config,
            ..Self::default()
        };

        for (x, kind) in (0i8..).zip(BACK_RANK_ORDER) {
            for (player, back_row, pawn_row) in [
                (Player::Black, BLACK_BACK_ROW, BLACK_PAWN_ROW),
                (Player::White, WHITE_BACK_ROW, WHITE_PAWN_ROW),
            ] {
                if let Some(square) = Coordinate::new(x, back_row) {
                    game_state.board.set(square, Some(Piece::new(kind, player)));
                }
                if let Some(square) = Coordinate::new(x, pawn_row) {
                    game_state
                        .board
                        .set(square, Some(Piece::new(PieceKind::Pawn, player)));
                }
            }
        }

        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, coordinate: Coordinate) -> Option<Piece> {
        self.board.piece_at(coordinate)
    }

    /// Puts a piece on a square, replacing any occupant. Setup only.
    pub fn place(&mut self, coordinate: Coordinate, piece: Piece) {
        self.board.set(coordinate, Some(piece));
    }

    /// Side to move. Pure read.
    #[inline]
    pub fn current_turn(&self) -> Player {
        self.side_to_move
    }

    /// Hands the move to the other side and returns it.
    #[inline]
    pub fn advance_turn(&mut self) -> Player {
        self.side_to_move = self.side_to_move.opposite();
        self.side_to_move
    }

    #[inline]
    pub fn playable(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Finished { winner } => Some(winner),
        }
    }

    #[inline]
    pub fn white_won(&self) -> bool {
        self.winner() == Some(Player::White)
    }

    #[inline]
    pub fn black_won(&self) -> bool {
        self.winner() == Some(Player::Black)
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Sum of piece values for `player`, king excluded.
    pub fn material(&self, player: Player) -> u32 {
        self.board
            .pieces_of(player)
            .filter(|(_, piece)| piece.kind != PieceKind::King)
            .map(|(_, piece)| piece.value())
            .sum()
    }

    pub fn possible_moves(&self, piece: &Piece, origin: Coordinate) -> Vec<Coordinate> {
        possible_moves(self, piece, origin)
    }

    pub fn all_legal_moves(&self, player: Player) -> Vec<LegalMove> {
        all_legal_moves(self, player)
    }

    pub fn is_move_legal(&self, origin: Coordinate, destination: Coordinate, mover: Player) -> bool {
        is_move_legal(self, origin, destination, mover)
    }

    pub fn is_in_check(&self, player: Player) -> bool {
        is_king_in_check(&self.board, player)
    }

    pub fn in_checkmate(&self, player: Player) -> bool {
        in_checkmate(self, player)
    }

    /// Applies a move without validating it. See `legal_move_apply::apply_move`.
    pub fn apply_move(
        &mut self,
        origin: Coordinate,
        destination: Coordinate,
        moving_piece: Piece,
    ) -> Move {
        apply_move(self, origin, destination, moving_piece)
    }

    pub fn play_move(
        &mut self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Move, ChessErrors> {
        play_move(self, origin, destination)
    }

    pub fn undo_last_move(&mut self) -> Result<Move, ChessErrors> {
        undo_last_move(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{GameState, GameStatus};
    use crate::game_state::chess_rules::{
        PinRule, RulesConfig, BACK_RANK_ORDER, STARTING_POSITION_FEN,
    };
    use crate::game_state::chess_types::{Coordinate, PieceKind, Player};

    fn at(x: i8, y: i8) -> Coordinate {
        Coordinate::new(x, y).expect("test coordinate should be on the board")
    }

    #[test]
    fn new_game_places_sixteen_pieces_per_side() {
        let game = GameState::new_game();
        assert_eq!(game.board.count(Player::White), 16);
        assert_eq!(game.board.count(Player::Black), 16);
        assert_eq!(game.status, GameStatus::InProgress);
        assert!(game.playable());
        assert!(!game.white_won());
        assert!(!game.black_won());
    }

    #[test]
    fn back_ranks_are_mirrored_and_pawn_rows_full() {
        let game = GameState::new_game();
        for (x, kind) in (0i8..).zip(BACK_RANK_ORDER) {
            let black = game.piece_at(at(x, 0)).expect("black back rank should be full");
            let white = game.piece_at(at(x, 7)).expect("white back rank should be full");
            assert_eq!((black.kind, black.player), (kind, Player::Black));
            assert_eq!((white.kind, white.player), (kind, Player::White));

            let black_pawn = game.piece_at(at(x, 1)).expect("black pawn row should be full");
            let white_pawn = game.piece_at(at(x, 6)).expect("white pawn row should be full");
            assert_eq!((black_pawn.kind, black_pawn.player), (PieceKind::Pawn, Player::Black));
            assert_eq!((white_pawn.kind, white_pawn.player), (PieceKind::Pawn, Player::White));
        }
        for y in 2..6 {
            for x in 0..8 {
                assert!(game.piece_at(at(x, y)).is_none());
            }
        }
    }

    #[test]
    fn new_game_matches_starting_fen() {
        let game = GameState::new_game();
        assert_eq!(game.get_fen(), STARTING_POSITION_FEN);
        let parsed = GameState::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(parsed.board, game.board);
    }

    #[test]
    fn advance_turn_alternates_strictly() {
        let mut game = GameState::new_game();
        assert_eq!(game.current_turn(), Player::White);
        assert_eq!(game.current_turn(), Player::White);

        let sequence: Vec<Player> = (0..4).map(|_| game.advance_turn()).collect();
        assert_eq!(
            sequence,
            vec![Player::Black, Player::White, Player::Black, Player::White]
        );
    }

    #[test]
    fn material_excludes_king() {
        let game = GameState::new_game();
        // 8 pawns + 2 knights + 2 bishops + 2 rooks + queen.
        assert_eq!(game.material(Player::White), 8 + 6 + 6 + 10 + 8);
        assert_eq!(game.material(Player::Black), game.material(Player::White));
    }

    #[test]
    fn with_config_keeps_rules() {
        let config = RulesConfig::default().with_pin_rule(PinRule::KingSafetyOnly);
        let game = GameState::with_config(config);
        assert_eq!(game.config.pin_rule, PinRule::KingSafetyOnly);
        assert_eq!(game.board, GameState::new_game().board);
    }
}
