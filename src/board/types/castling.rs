//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const WHITE_KING_MOVED: u8 = 1 << 0;
const WHITE_ROOK_A_MOVED: u8 = 1 << 1;
const WHITE_ROOK_H_MOVED: u8 = 1 << 2;
const BLACK_KING_MOVED: u8 = 1 << 3;
const BLACK_ROOK_A_MOVED: u8 = 1 << 4;
const BLACK_ROOK_H_MOVED: u8 = 1 << 5;

const ALL_MOVED: u8 = WHITE_KING_MOVED
    | WHITE_ROOK_A_MOVED
    | WHITE_ROOK_H_MOVED
    | BLACK_KING_MOVED
    | BLACK_ROOK_A_MOVED
    | BLACK_ROOK_H_MOVED;

/// Which rook a king castles with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// Toward the h-file rook (O-O)
    KingSide,
    /// Toward the a-file rook (O-O-O)
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Home corner of the rook for this side
    #[inline]
    #[must_use]
    pub const fn rook_home(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square(color.home_row(), 7),
            CastleSide::QueenSide => Square(color.home_row(), 0),
        }
    }

    /// Where the rook lands after castling
    #[inline]
    #[must_use]
    pub const fn rook_target(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square(color.home_row(), 5),
            CastleSide::QueenSide => Square(color.home_row(), 3),
        }
    }

    /// Where the king lands after castling
    #[inline]
    #[must_use]
    pub const fn king_target(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square(color.home_row(), 6),
            CastleSide::QueenSide => Square(color.home_row(), 2),
        }
    }

    /// Columns strictly between king and rook that must be empty
    #[inline]
    #[must_use]
    pub(crate) const fn empty_cols(self) -> &'static [usize] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Columns the king stands on, crosses, or lands on; none may be attacked
    #[inline]
    #[must_use]
    pub(crate) const fn king_path_cols(self) -> &'static [usize] {
        match self {
            CastleSide::KingSide => &[4, 5, 6],
            CastleSide::QueenSide => &[4, 3, 2],
        }
    }
}

/// Home square of the king for a color (e1 or e8)
#[inline]
#[must_use]
pub const fn king_home(color: Color) -> Square {
    Square(color.home_row(), 4)
}

/// Monotonic "has moved" flags for both kings and all four rooks.
///
/// A flag, once set, stays set for the rest of the game. The default value
/// (nothing moved) is the start-of-game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Nothing has moved yet
    #[must_use]
    pub const fn new() -> Self {
        CastlingRights(0)
    }

    /// Every king and rook has moved; no castling is possible
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(ALL_MOVED)
    }

    #[inline]
    #[must_use]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & Self::king_bit(color) != 0
    }

    #[inline]
    #[must_use]
    pub const fn rook_moved(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::rook_bit(color, side) != 0
    }

    /// Returns true if neither the king nor the rook for `side` has moved
    #[inline]
    #[must_use]
    pub const fn can_castle(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.0 |= Self::king_bit(color);
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::rook_bit(color, side);
    }

    /// Clear the king and rook flags for one side. Only used when setting up a
    /// position; play never clears a flag.
    pub(crate) fn grant(&mut self, color: Color, side: CastleSide) {
        self.0 &= !(Self::king_bit(color) | Self::rook_bit(color, side));
    }

    /// Mark whichever rook calls `square` home. Moving from or capturing on a
    /// rook corner both lose that rook's castling right.
    pub(crate) fn touch_rook_home(&mut self, square: Square) {
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if side.rook_home(color) == square {
                    self.mark_rook_moved(color, side);
                }
            }
        }
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value; unknown bits are dropped
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_MOVED)
    }

    #[inline]
    const fn king_bit(color: Color) -> u8 {
        match color {
            Color::White => WHITE_KING_MOVED,
            Color::Black => BLACK_KING_MOVED,
        }
    }

    #[inline]
    const fn rook_bit(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::QueenSide) => WHITE_ROOK_A_MOVED,
            (Color::White, CastleSide::KingSide) => WHITE_ROOK_H_MOVED,
            (Color::Black, CastleSide::QueenSide) => BLACK_ROOK_A_MOVED,
            (Color::Black, CastleSide::KingSide) => BLACK_ROOK_H_MOVED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_rights_allow_everything() {
        let rights = CastlingRights::new();
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                assert!(rights.can_castle(color, side));
            }
        }
    }

    #[test]
    fn test_king_move_blocks_both_sides() {
        let mut rights = CastlingRights::new();
        rights.mark_king_moved(Color::White);
        assert!(!rights.can_castle(Color::White, CastleSide::KingSide));
        assert!(!rights.can_castle(Color::White, CastleSide::QueenSide));
        assert!(rights.can_castle(Color::Black, CastleSide::KingSide));
    }

    #[test]
    fn test_touch_rook_home_marks_matching_rook() {
        let mut rights = CastlingRights::new();
        rights.touch_rook_home("h8".parse().unwrap());
        assert!(rights.rook_moved(Color::Black, CastleSide::KingSide));
        assert!(!rights.rook_moved(Color::Black, CastleSide::QueenSide));
        assert!(!rights.rook_moved(Color::White, CastleSide::KingSide));

        rights.touch_rook_home("e4".parse().unwrap());
        assert_eq!(rights.as_u8().count_ones(), 1);
    }

    #[test]
    fn test_flags_are_monotonic() {
        let mut rights = CastlingRights::new();
        rights.mark_rook_moved(Color::White, CastleSide::QueenSide);
        rights.mark_rook_moved(Color::White, CastleSide::QueenSide);
        assert!(rights.rook_moved(Color::White, CastleSide::QueenSide));
        assert_eq!(CastlingRights::from_u8(0xFF), CastlingRights::none());
    }

    #[test]
    fn test_castle_geometry() {
        assert_eq!(king_home(Color::White).to_string(), "e1");
        assert_eq!(CastleSide::KingSide.king_target(Color::Black).to_string(), "g8");
        assert_eq!(CastleSide::QueenSide.rook_target(Color::White).to_string(), "d1");
        assert_eq!(CastleSide::QueenSide.rook_home(Color::Black).to_string(), "a8");
    }
}
