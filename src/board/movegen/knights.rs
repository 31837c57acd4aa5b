use super::super::{Color, GameState, Move, MoveList, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl GameState {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for (dr, dc) in KNIGHT_OFFSETS {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            match self.board.piece_at(to) {
                Some((owner, _)) if owner == color => {}
                _ => moves.push(Move::new(from, to)),
            }
        }
    }
}
