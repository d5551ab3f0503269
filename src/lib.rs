//! Crate root module declarations for the square_chess rules engine.
//!
//! The engine keeps an 8x8 grid of pieces, generates candidate moves per
//! piece, filters them for legality, detects check and checkmate and applies
//! moves while tracking which side has won. Front-ends (the bundled text
//! driver, or any GUI) talk to `game_state::game_state::GameState`.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod coordinate;
    pub mod game_state;
    pub mod piece_grid;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
