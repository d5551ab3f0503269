//! Engine abstraction used by the text driver.
//!
//! An engine inspects the game and proposes one legal move for the side to
//! move, plus free-form info lines for diagnostics.

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<LegalMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessErrors>;
}
