//! Legal move filtering, check detection and the game-over query.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, GameState, LegalityMode, Move, MoveList, Piece, Square};

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Side to move has legal moves and is not in check
    Ongoing,
    /// Side to move is in check but can respond
    Check,
    /// Side to move is in check with no legal moves
    Checkmate { winner: Color },
    /// Side to move has no legal moves but is not in check
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate, draw"),
        }
    }
}

impl GameState {
    /// Legal moves for `color`: pseudo-legal moves that do not leave its own
    /// king attacked. Order is generation order.
    #[must_use]
    pub fn legal_moves(&self, color: Color, mode: LegalityMode) -> MoveList {
        let mut moves = self.pseudo_legal_moves(color, false, mode);
        moves.retain(|&mv| self.keeps_king_safe(mv, color, mode));
        moves
    }

    /// Returns true if `color`'s king is attacked.
    ///
    /// A board without that king breaks the engine's invariants. This is
    /// logged and reported as check so that no move is considered legal.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.board.find_king(color) {
            Some(king) => self.is_square_attacked(king, color.opponent(), LegalityMode::Reference),
            None => {
                error!("no {} king on the board", color);
                true
            }
        }
    }

    /// Returns true if some attacks-only pseudo-legal move of `attacker`
    /// lands on `square`. In strict mode pawn diagonals count even when the
    /// square is empty.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color, mode: LegalityMode) -> bool {
        if mode == LegalityMode::Strict && self.pawn_covers(square, attacker) {
            return true;
        }
        self.pseudo_legal_moves(attacker, true, mode)
            .iter()
            .any(|m| m.to() == square)
    }

    /// Checkmate, stalemate, check or ongoing for the side to move.
    #[must_use]
    pub fn status(&self, mode: LegalityMode) -> GameStatus {
        let in_check = self.is_in_check(self.turn);
        let has_moves = !self.legal_moves(self.turn, mode).is_empty();
        match (has_moves, in_check) {
            (true, false) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Checkmate {
                winner: self.turn.opponent(),
            },
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// Play `mv` on a copy of the board and look at the mover's king.
    fn keeps_king_safe(&self, mv: Move, color: Color, mode: LegalityMode) -> bool {
        let mut sim = self.clone();
        if mode == LegalityMode::Strict {
            sim.board.apply_side_effects(mv, color);
        }
        sim.board.apply_plain(mv);
        !sim.is_in_check(color)
    }

    fn pawn_covers(&self, square: Square, attacker: Color) -> bool {
        let back = -attacker.pawn_direction();
        [-1, 1].into_iter().any(|dc| {
            square
                .offset(back, dc)
                .is_some_and(|s| self.board.piece_at(s) == Some((attacker, Piece::Pawn)))
        })
    }
}
