//! Errors used throughout the rules engine.
//!
//! Move generation and legality never fail: an unavailable move is simply
//! absent from a returned move set. `ChessErrors` covers the fallible edges of
//! the crate instead: parsing coordinates and FEN, and the validated
//! `play_move`/`undo_last_move` path that guards board mutation.
//!
//! Parsing variants carry the offending input so callers can echo it back to
//! a user. Game-flow variants (`NotYourTurn`, `IllegalMove`, `GameIsOver`)
//! describe a request the current position cannot honor; the board is left
//! untouched when one is returned.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Coordinate, Player};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A column/row pair outside `0..8`.
    ///
    /// Payload: (x, y) as supplied.
    InvalidCoordinate(i8, i8),

    /// Text that is not of the `"x y"` form.
    InvalidCoordinateString(String),

    /// Text that is not an algebraic square (`a1`..`h8`) or move (`e2e4`).
    InvalidAlgebraicString(String),

    /// A character that has no meaning in a FEN piece-placement field.
    InvalidFENtoken(char),

    /// FEN with the wrong overall shape (rank count, rank width, side field).
    ///
    /// Payload: a description of what was wrong.
    InvalidFENstringForm(String),

    /// A move was requested from a square with no piece on it.
    EmptySquare(Coordinate),

    /// The selected piece belongs to the side that is not on move.
    NotYourTurn { expected: Player, found: Player },

    /// The destination is not among the piece's legal moves.
    IllegalMove { from: Coordinate, to: Coordinate },

    /// A king has been captured; no further moves are accepted.
    GameIsOver,

    /// `undo_last_move` was called with an empty history.
    NothingToUndo,
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidCoordinate(x, y) => {
                write!(f, "coordinate ({x}, {y}) is off the board")
            }
            ChessErrors::InvalidCoordinateString(text) => {
                write!(f, "expected two integers 'x y', got '{text}'")
            }
            ChessErrors::InvalidAlgebraicString(text) => {
                write!(f, "invalid algebraic notation: '{text}'")
            }
            ChessErrors::InvalidFENtoken(ch) => write!(f, "invalid FEN character '{ch}'"),
            ChessErrors::InvalidFENstringForm(msg) => write!(f, "malformed FEN: {msg}"),
            ChessErrors::EmptySquare(coordinate) => {
                write!(f, "no piece on {coordinate}")
            }
            ChessErrors::NotYourTurn { expected, found } => write!(
                f,
                "it is {}'s turn, selected piece belongs to {}",
                expected.name(),
                found.name()
            ),
            ChessErrors::IllegalMove { from, to } => {
                write!(f, "move {from} -> {to} is not legal")
            }
            ChessErrors::GameIsOver => write!(f, "the game is over"),
            ChessErrors::NothingToUndo => write!(f, "no move to undo"),
        }
    }
}

impl Error for ChessErrors {}
