//! The 8×8 mailbox board.
//!
//! `Board` only knows where pieces stand. Turn, castling flags and the en
//! passant target live in [`GameState`](super::GameState).

use std::fmt;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Move, MoveKind, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (col, piece) in BACK_RANK.iter().enumerate() {
        board.set(Square(0, col), Some((Color::Black, *piece)));
        board.set(Square(1, col), Some((Color::Black, Piece::Pawn)));
        board.set(Square(6, col), Some((Color::White, Piece::Pawn)));
        board.set(Square(7, col), Some((Color::White, *piece)));
    }
    board
});

/// An 8×8 grid of optional pieces indexed `[row][column]`.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard initial arrangement
    #[must_use]
    pub fn starting_position() -> Self {
        STARTING_BOARD.clone()
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<(Color, Piece)>) {
        self.squares[sq.0][sq.1] = piece;
    }

    /// Every occupied square in rank-major order starting at a8
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
    }

    /// Location of `color`'s king, scanning from a8
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// Move the piece on `from` to `to`, replacing whatever stood there, then
    /// overwrite the destination with the promotion piece if the move has one.
    ///
    /// Returns the piece previously on `to`.
    pub(crate) fn apply_plain(&mut self, mv: Move) -> Option<(Color, Piece)> {
        let moving = self.piece_at(mv.from());
        let captured = self.piece_at(mv.to());
        self.set(mv.to(), moving);
        self.set(mv.from(), None);
        if let (Some(promo), Some((color, _))) = (mv.promotion(), moving) {
            self.set(mv.to(), Some((color, promo)));
        }
        captured
    }

    /// Perform the parts of a special move that touch squares other than
    /// `from`/`to`: lift the pawn taken en passant, or slide the castling rook.
    ///
    /// Returns the pawn removed by an en passant capture.
    pub(crate) fn apply_side_effects(&mut self, mv: Move, mover: Color) -> Option<(Color, Piece)> {
        match mv.kind() {
            MoveKind::Normal => None,
            MoveKind::EnPassant => {
                let victim = en_passant_victim(mv.to(), mover)?;
                let taken = self.piece_at(victim);
                self.set(victim, None);
                taken
            }
            MoveKind::Castle(side) => {
                let rook_from = side.rook_home(mover);
                let rook = self.piece_at(rook_from);
                self.set(side.rook_target(mover), rook);
                self.set(rook_from, None);
                None
            }
        }
    }
}

/// Square of the pawn captured by an en passant move landing on `target`:
/// one row behind the target from the mover's point of view.
#[inline]
pub(crate) fn en_passant_victim(target: Square, mover: Color) -> Option<Square> {
    target.offset(-mover.pawn_direction(), 0)
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let c = match self.squares[row][col] {
                    Some((color, piece)) => piece.to_colored_char(color),
                    None => '.',
                };
                write!(f, "{c}")?;
                if col < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(")?;
        writeln!(f, "{self}")?;
        write!(f, ")")
    }
}
