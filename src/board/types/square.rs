//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (row, column).
///
/// Row 0 is rank 8 (Black's back rank) and column 0 is file a, so `e2` is
/// `(6, 4)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub(crate) usize, pub(crate) usize);

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Returns true if (row, col) lies on the board
    #[inline]
    #[must_use]
    pub const fn in_bounds(row: isize, col: isize) -> bool {
        row >= 0 && row < 8 && col >= 0 && col < 8
    }

    /// Row index (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Column index (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Rank number as printed on the board (1-8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        8 - self.0
    }

    /// File letter ('a'-'h')
    #[inline]
    #[must_use]
    pub const fn file(self) -> char {
        (b'a' + self.1 as u8) as char
    }

    /// The square displaced by (dr, dc), or `None` if that leaves the board
    #[inline]
    #[must_use]
    pub const fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.0 as isize + dr;
        let col = self.1 as isize + dc;
        if Square::in_bounds(row, col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// All 64 squares in rank-major order starting at a8
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(|idx| Square(idx / 8, idx % 8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => 8 - (rank as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}
