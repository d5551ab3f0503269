//! Board squares and player-relative stepping. White's forward direction is
//! toward row 0, so displacements are negated for White before they are applied.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Player;

/// A square on the board. `x` is the column, `y` the row; both are always in
/// `0..8`, so any `Coordinate` value is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    x: i8,
    y: i8,
}

impl Coordinate {
    /// Bounds-checked constructor.
    #[inline]
    pub const fn new(x: i8, y: i8) -> Option<Self> {
        if x < 0 || x >= BOARD_SIZE || y < 0 || y >= BOARD_SIZE {
            None
        } else {
            Some(Self { x, y })
        }
    }

    /// Like `new`, but reports the offending pair.
    pub fn try_new(x: i8, y: i8) -> Result<Self, ChessErrors> {
        Self::new(x, y).ok_or(ChessErrors::InvalidCoordinate(x, y))
    }

    #[inline]
    pub const fn x(&self) -> i8 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> i8 {
        self.y
    }

    /// Moves a coordinate by `(dx, dy)` as seen from `player`'s side of the
    /// board. White looks up the board, so its displacement is negated.
    ///
    /// Returns `None` if the result falls off the board.
    #[inline]
    pub fn shift(player: Player, origin: Coordinate, dx: i8, dy: i8) -> Option<Coordinate> {
        match player {
            Player::White => origin.offset(-dx, -dy),
            Player::Black => origin.offset(dx, dy),
        }
    }

    /// Absolute displacement, no side flip.
    #[inline]
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Coordinate> {
        Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?)
    }

    /// Every square, row by row from row 0.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coordinate { x, y }))
    }

    /// Parses the driver's `"x y"` form.
    pub fn parse_pair(text: &str) -> Result<Coordinate, ChessErrors> {
        let mut parts = text.split_whitespace();
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ChessErrors::InvalidCoordinateString(text.to_owned()));
        };
        let x = x
            .parse::<i8>()
            .map_err(|_| ChessErrors::InvalidCoordinateString(text.to_owned()))?;
        let y = y
            .parse::<i8>()
            .map_err(|_| ChessErrors::InvalidCoordinateString(text.to_owned()))?;
        Self::try_new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
