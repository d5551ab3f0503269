//! Algebraic square names for board coordinates.
//!
//! Files `a`..`h` map to columns 0..7. Rank 8 is row 0 (Black's back rank)
//! and rank 1 is row 7, so `e1` is White's king square `(4, 7)`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Coordinate;

/// Convert algebraic notation (for example: "e4") to a coordinate.
pub fn algebraic_to_coordinate(square: &str) -> Result<Coordinate, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let x = (file - b'a') as i8;
    let y = BOARD_SIZE - (rank - b'0') as i8;
    Coordinate::try_new(x, y)
}

/// Convert a coordinate to algebraic notation (for example: "e4").
pub fn coordinate_to_algebraic(coordinate: Coordinate) -> String {
    let file_char = char::from(b'a' + coordinate.x() as u8);
    let rank_char = char::from(b'0' + (BOARD_SIZE - coordinate.y()) as u8);
    format!("{file_char}{rank_char}")
}

/// Split a four-character move such as "e2e4" into origin and destination.
pub fn algebraic_move_to_coordinates(text: &str) -> Result<(Coordinate, Coordinate), ChessErrors> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }
    let from = algebraic_to_coordinate(&text[0..2])?;
    let to = algebraic_to_coordinate(&text[2..4])?;
    Ok((from, to))
}
