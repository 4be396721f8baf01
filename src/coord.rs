//! Board coordinates and the text grammar used to enter them.
//!
//! Rows are letters `A`..`J`, columns are numbers `1`..`10`. Internally both
//! are zero-based and a [`Coordinate`] can only be built inside the board.

use core::fmt;
use core::str::FromStr;

use crate::common::{CoordError, PlacementError};
use crate::config::BOARD_SIZE;

/// A cell on the 10×10 grid, ordered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Returns `None` when either index falls outside the board.
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Coordinate {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Every cell of the board, row by row.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|r| (0..BOARD_SIZE).filter_map(move |c| Coordinate::new(r, c)))
    }

    /// Letter used for `row` in the text grammar.
    pub fn row_label(row: usize) -> char {
        (b'A' + row as u8) as char
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Coordinate::row_label(self.row()), self.col() + 1)
    }
}

impl FromStr for Coordinate {
    type Err = CoordError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let mut chars = token.chars();
        let letter = chars.next().ok_or(CoordError::Malformed)?;
        if !letter.is_ascii_alphabetic() {
            return Err(CoordError::Malformed);
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoordError::Malformed);
        }

        let row = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
        // all digits, so a parse failure can only be overflow
        let col: usize = digits.parse().map_err(|_| CoordError::OutOfRange)?;
        if col == 0 {
            return Err(CoordError::OutOfRange);
        }
        Coordinate::new(row, col - 1).ok_or(CoordError::OutOfRange)
    }
}

/// Parse a placement line: two coordinate tokens naming the ends of a ship.
pub fn parse_placement(line: &str) -> Result<(Coordinate, Coordinate), PlacementError> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(a), Some(b), None) => Ok((a.parse::<Coordinate>()?, b.parse::<Coordinate>()?)),
        _ => Err(PlacementError::MalformedInput),
    }
}
