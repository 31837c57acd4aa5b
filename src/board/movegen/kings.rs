use super::super::{
    king_home, CastleSide, Color, GameState, LegalityMode, Move, MoveList, Piece, Square,
};

impl GameState {
    pub(crate) fn generate_king_moves(
        &self,
        from: Square,
        color: Color,
        attacks_only: bool,
        mode: LegalityMode,
        moves: &mut MoveList,
    ) {
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let Some(to) = from.offset(dr, dc) else {
                    continue;
                };
                match self.board.piece_at(to) {
                    Some((owner, _)) if owner == color => {}
                    _ => moves.push(Move::new(from, to)),
                }
            }
        }

        if attacks_only || from != king_home(color) || self.castling.king_moved(color) {
            return;
        }
        for side in CastleSide::BOTH {
            if self.can_castle(color, side, mode) {
                moves.push(Move::castle(from, side.king_target(color), side));
            }
        }
    }

    fn can_castle(&self, color: Color, side: CastleSide, mode: LegalityMode) -> bool {
        let row = color.home_row();
        if self.castling.rook_moved(color, side)
            || self.board.piece_at(side.rook_home(color)) != Some((color, Piece::Rook))
        {
            return false;
        }
        if side
            .empty_cols()
            .iter()
            .any(|&col| !self.board.is_empty(Square(row, col)))
        {
            return false;
        }
        let enemy = color.opponent();
        side.king_path_cols()
            .iter()
            .all(|&col| !self.is_square_attacked(Square(row, col), enemy, mode))
    }
}
