//! Fluent builder for setting up positions.
//!
//! Positions are placed piece by piece. `build` checks the few invariants the
//! move generator depends on and hands back a ready [`GameState`].
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let state = BoardBuilder::new()
//!     .piece("e1".parse::<Square>().unwrap(), Color::White, Piece::King)
//!     .piece("e8".parse::<Square>().unwrap(), Color::Black, Piece::King)
//!     .piece("a2".parse::<Square>().unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(state.turn(), Color::White);
//! ```

use super::error::BuildError;
use super::{Board, CastleSide, CastlingRights, Color, GameState, Piece, Square};

/// A fluent builder for [`GameState`] positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// An empty board, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard initial position with every castling right intact.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::starting_position();
        BoardBuilder {
            pieces: board.pieces().collect(),
            castling: CastlingRights::new(),
            ..Self::new()
        }
    }

    /// Place a piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Treat the king and h-file rook of `color` as unmoved.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling.grant(color, CastleSide::KingSide);
        self
    }

    /// Treat the king and a-file rook of `color` as unmoved.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling.grant(color, CastleSide::QueenSide);
        self
    }

    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::new();
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::none();
        self
    }

    /// Square a pawn skipped over on the previous double push.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant_target = None;
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position.
    ///
    /// Fails if either side does not have exactly one king, if a pawn stands
    /// on the first or last rank, or if the en passant target is occupied or
    /// not on the rank a double push by the opponent would have skipped.
    pub fn build(self) -> Result<GameState, BuildError> {
        let mut board = Board::empty();
        for &(square, color, piece) in &self.pieces {
            if piece == Piece::Pawn && (square.row() == 0 || square.row() == 7) {
                return Err(BuildError::PawnOnBackRank { square });
            }
            board.set(square, Some((color, piece)));
        }

        for color in Color::BOTH {
            let found = board
                .pieces()
                .filter(|&(_, c, p)| c == color && p == Piece::King)
                .count();
            if found != 1 {
                return Err(BuildError::KingCount { color, found });
            }
        }

        if let Some(target) = self.en_passant_target {
            let expected_row = match self.side_to_move {
                Color::White => 2,
                Color::Black => 5,
            };
            if target.row() != expected_row || !board.is_empty(target) {
                return Err(BuildError::InvalidEnPassant { square: target });
            }
        }

        Ok(GameState {
            board,
            turn: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn kings() -> BoardBuilder {
        BoardBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
    }

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build().unwrap();
        assert_eq!(built, GameState::new());
    }

    #[test]
    fn test_kings_only() {
        let state = kings().build().unwrap();
        assert_eq!(state.board().pieces().count(), 2);
        assert_eq!(state.castling_rights(), CastlingRights::none());
        assert!(state.board().is_empty(sq("a1")));
    }

    #[test]
    fn test_castling_rights() {
        let state = BoardBuilder::starting_position()
            .no_castling_rights()
            .castle_kingside(Color::White)
            .build()
            .unwrap();

        let rights = state.castling_rights();
        assert!(rights.can_castle(Color::White, CastleSide::KingSide));
        assert!(!rights.can_castle(Color::White, CastleSide::QueenSide));
        assert!(!rights.can_castle(Color::Black, CastleSide::KingSide));
        assert!(!rights.can_castle(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn test_castling_rights_replaced_wholesale() {
        let mut rights = CastlingRights::none();
        rights.grant(Color::Black, CastleSide::QueenSide);

        let state = BoardBuilder::starting_position()
            .castling(rights)
            .build()
            .unwrap();
        assert_eq!(state.castling_rights(), rights);

        let restored = BoardBuilder::starting_position()
            .no_castling_rights()
            .all_castling_rights()
            .build()
            .unwrap();
        assert_eq!(restored.castling_rights(), CastlingRights::new());
        assert_eq!(restored, GameState::new());
    }

    #[test]
    fn test_clear_en_passant() {
        let state = kings()
            .en_passant(sq("d3"))
            .clear_en_passant()
            .build()
            .unwrap();
        assert_eq!(state.en_passant_target(), None);
    }

    #[test]
    fn test_side_to_move_and_counters() {
        let state = kings()
            .side_to_move(Color::Black)
            .halfmove_clock(7)
            .fullmove_number(30)
            .build()
            .unwrap();
        assert_eq!(state.turn(), Color::Black);
        assert_eq!(state.halfmove_clock(), 7);
        assert_eq!(state.fullmove_number(), 30);
    }

    #[test]
    fn test_clear_square() {
        let state = BoardBuilder::starting_position()
            .clear(sq("a1"))
            .build()
            .unwrap();
        assert!(state.board().is_empty(sq("a1")));
        assert!(!state.board().is_empty(sq("b1")));
    }

    #[test]
    fn test_king_count_validation() {
        let missing = BoardBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .build();
        assert_eq!(
            missing,
            Err(BuildError::KingCount {
                color: Color::Black,
                found: 0
            })
        );

        let doubled = kings().piece(sq("a1"), Color::White, Piece::King).build();
        assert_eq!(
            doubled,
            Err(BuildError::KingCount {
                color: Color::White,
                found: 2
            })
        );
    }

    #[test]
    fn test_pawn_on_back_rank_rejected() {
        let result = kings().piece(sq("c8"), Color::White, Piece::Pawn).build();
        assert_eq!(result, Err(BuildError::PawnOnBackRank { square: sq("c8") }));
    }

    #[test]
    fn test_en_passant_validation() {
        assert!(kings()
            .piece(sq("d5"), Color::Black, Piece::Pawn)
            .en_passant(sq("d6"))
            .build()
            .is_ok());
        assert!(kings()
            .side_to_move(Color::Black)
            .en_passant(sq("c3"))
            .build()
            .is_ok());

        let wrong_rank = kings().en_passant(sq("d3")).build();
        assert_eq!(
            wrong_rank,
            Err(BuildError::InvalidEnPassant { square: sq("d3") })
        );
        let occupied = kings()
            .piece(sq("d6"), Color::Black, Piece::Knight)
            .en_passant(sq("d6"))
            .build();
        assert!(occupied.is_err());
    }
}
