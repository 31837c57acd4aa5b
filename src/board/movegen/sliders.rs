use super::super::{Color, GameState, Move, MoveList, Square};

const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &DIAGONALS,
            SliderType::Rook => &ORTHOGONALS,
            SliderType::Queen => &ALL_DIRECTIONS,
        }
    }
}

impl GameState {
    /// Cast a ray per direction until the edge, stopping before a friendly
    /// piece or on an enemy piece.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in slider.directions() {
            let mut cursor = from.offset(dr, dc);
            while let Some(to) = cursor {
                match self.board.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some((owner, _)) => {
                        if owner != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                cursor = to.offset(dr, dc);
            }
        }
    }
}
