//! Pseudo-legal move generation.
//!
//! Moves here obey piece movement and occupancy rules but may leave the
//! mover's own king attacked; [`legality`](super::legality) filters those.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Color, GameState, LegalityMode, MoveList, Piece};

impl GameState {
    /// Every pseudo-legal move for `color`, in board scan order (a8 to h1).
    ///
    /// With `attacks_only` set, castling is not generated. Castling itself
    /// asks which squares are attacked, so attack queries must not recurse
    /// into it. `mode` only affects those castling attack queries.
    #[must_use]
    pub fn pseudo_legal_moves(
        &self,
        color: Color,
        attacks_only: bool,
        mode: LegalityMode,
    ) -> MoveList {
        let mut moves = MoveList::new();
        for (from, owner, piece) in self.board.pieces() {
            if owner != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, color, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, color, &mut moves),
                Piece::Bishop => {
                    self.generate_slider_moves(from, color, SliderType::Bishop, &mut moves)
                }
                Piece::Rook => self.generate_slider_moves(from, color, SliderType::Rook, &mut moves),
                Piece::Queen => {
                    self.generate_slider_moves(from, color, SliderType::Queen, &mut moves)
                }
                Piece::King => {
                    self.generate_king_moves(from, color, attacks_only, mode, &mut moves)
                }
            }
        }
        moves
    }
}
