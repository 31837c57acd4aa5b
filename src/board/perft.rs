use super::{GameState, LegalityMode, Move};

impl GameState {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: usize, mode: LegalityMode) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(self.turn, mode);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            let mut child = self.clone();
            child.apply_unchecked(m);
            nodes += child.perft(depth - 1, mode);
        }

        nodes
    }

    /// Node counts split by root move, in generation order.
    #[must_use]
    pub fn perft_divide(&self, depth: usize, mode: LegalityMode) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        self.legal_moves(self.turn, mode)
            .into_iter()
            .map(|m| {
                let mut child = self.clone();
                child.apply_unchecked(m);
                (m, child.perft(depth - 1, mode))
            })
            .collect()
    }
}
