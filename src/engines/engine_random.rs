//! Random-move engine.
//!
//! Selects uniformly from the legal moves of the side to move. Used as the
//! driver's sparring partner and in tests that need arbitrary legal play.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Deterministic engine for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessErrors> {
        if !game_state.playable() {
            return Err(ChessErrors::GameIsOver);
        }

        let legal_moves = all_legal_moves(game_state, game_state.current_turn());

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "random_engine legal_moves {}",
            legal_moves.len()
        ));

        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}
