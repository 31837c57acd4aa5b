//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::Piece;
use super::square::Square;
use crate::board::error::MoveParseError;

/// What kind of special handling a move needs when applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    #[default]
    Normal,
    Castle(CastleSide),
    EnPassant,
}

/// A move between two squares.
///
/// Equality and hashing look at `from` and `to` only. A bare coordinate
/// candidate such as `"e7e8".parse()` therefore compares equal to the
/// generated promotion move it refers to.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    /// Create a plain move (quiet or capture)
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::Normal,
        }
    }

    /// Create a promotion move
    #[inline]
    #[must_use]
    pub const fn new_promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
            kind: MoveKind::Normal,
        }
    }

    /// Create an en passant capture
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::EnPassant,
        }
    }

    /// Create a castling move; `from`/`to` are the king's squares
    #[inline]
    #[must_use]
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Self {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::Castle(side),
        }
    }

    /// Same move with a different promotion piece
    #[inline]
    #[must_use]
    pub const fn with_promotion(mut self, piece: Piece) -> Self {
        self.promotion = Some(piece);
        self
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Get the promotion piece, if any
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        matches!(self.kind, MoveKind::Castle(CastleSide::KingSide))
    }

    #[inline]
    #[must_use]
    pub const fn is_castle_queenside(self) -> bool {
        matches!(self.kind, MoveKind::Castle(CastleSide::QueenSide))
    }

    /// The castling side, if this is a castling move
    #[inline]
    #[must_use]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::Castle(side) => Some(side),
            _ => None,
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        match self.kind {
            MoveKind::Normal => {}
            MoveKind::Castle(side) => write!(f, " castle {side:?}")?,
            MoveKind::EnPassant => write!(f, " ep")?,
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parses `"e2e4"`, `"e2 e4"` or `"e7e8q"`. The result carries no
    /// special-move flags; match it against generated moves to get them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if !(4..=5).contains(&chars.len()) {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let parse_square = |pair: &[char]| {
            pair.iter()
                .collect::<String>()
                .parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: s.to_string(),
                })
        };
        let from = parse_square(&chars[0..2])?;
        let to = parse_square(&chars[2..4])?;

        let mut mv = Move::new(from, to);
        if let Some(&c) = chars.get(4) {
            match Piece::from_char(c) {
                Some(piece) if piece.is_promotion_target() && c.is_ascii_lowercase() => {
                    mv = mv.with_promotion(piece);
                }
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            }
        }
        Ok(mv)
    }
}

/// Capacity reserved up front by `MoveList::new`.
pub(crate) const MAX_MOVES: usize = 256;

/// List of moves, preallocated for a full position's worth of moves.
///
/// Positions set up by hand can exceed the reserve; the list then grows
/// instead of overflowing.
#[derive(Clone, Default)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    /// Generated move matching `candidate` by (from, to)
    #[must_use]
    pub fn find(&self, candidate: Move) -> Option<Move> {
        self.iter().copied().find(|m| *m == candidate)
    }

    /// Returns true if any move matches `candidate` by (from, to)
    #[must_use]
    pub fn contains(&self, candidate: Move) -> bool {
        self.find(candidate).is_some()
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    inner: std::vec::IntoIter<Move>,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter {
            inner: self.moves.into_iter(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.moves.len(),
            "MoveList index {} out of bounds (len {})",
            idx,
            self.moves.len()
        );
        &self.moves[idx]
    }
}
