use super::super::grid::en_passant_victim;
use super::super::{Color, GameState, Move, MoveList, Piece, Square};

impl GameState {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.board.is_empty(one) {
                moves.push(pawn_move(from, one, color));
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.board.is_empty(two) {
                            moves.push(Move::new(from, two));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            match self.board.piece_at(target) {
                Some((owner, _)) if owner != color => {
                    moves.push(pawn_move(from, target, color));
                }
                _ if Some(target) == self.en_passant => {
                    let victim = en_passant_victim(target, color).and_then(|s| self.board.piece_at(s));
                    if victim == Some((color.opponent(), Piece::Pawn)) {
                        moves.push(Move::en_passant(from, target));
                    }
                }
                _ => {}
            }
        }
    }
}

/// A pawn step or capture, queening by default on the last row.
fn pawn_move(from: Square, to: Square, color: Color) -> Move {
    let last_row = color.opponent().home_row();
    if to.row() == last_row {
        Move::new_promotion(from, to, Piece::Queen)
    } else {
        Move::new(from, to)
    }
}
