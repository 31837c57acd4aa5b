use super::{Board, CastlingRights, Color, Move, Piece, Square};

/// Everything that defines a position: the board plus turn, castling flags,
/// en passant target and move counters.
///
/// This is the unit copied into undo/redo history. Cloning copies the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl GameState {
    /// The standard starting position with White to move
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::starting_position(),
            turn: Color::White,
            castling: CastlingRights::new(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /// Half-moves since the last pawn move or capture. Tracked only; no
    /// fifty-move draw is declared from it.
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Apply a move that is already known to be legal for the side to move.
    ///
    /// The move must come from the generator so its flags and default
    /// promotion are set. The side effects happen in this order: en passant
    /// removal, castling rook slide, the piece move itself, and then the
    /// promotion overwrite. After that the castling flags, en passant target
    /// and counters are updated and the turn passes.
    pub(crate) fn apply_unchecked(&mut self, mv: Move) {
        let mover = self.turn;
        let moving = self.board.piece_at(mv.from());

        let taken_en_passant = self.board.apply_side_effects(mv, mover);
        if let Some(side) = mv.castle_side() {
            self.castling.mark_king_moved(mover);
            self.castling.mark_rook_moved(mover, side);
        }
        let captured = self.board.apply_plain(mv).or(taken_en_passant);

        match moving {
            Some((color, Piece::King)) => self.castling.mark_king_moved(color),
            Some((_, Piece::Rook)) => self.castling.touch_rook_home(mv.from()),
            _ => {}
        }
        if captured.is_some() {
            self.castling.touch_rook_home(mv.to());
        }

        let is_pawn = matches!(moving, Some((_, Piece::Pawn)));
        self.en_passant = None;
        if is_pawn && mv.from().row().abs_diff(mv.to().row()) == 2 {
            let mid_row = (mv.from().row() + mv.to().row()) / 2;
            self.en_passant = Some(Square(mid_row, mv.from().col()));
        }

        if is_pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if mover == Color::Black {
            self.fullmove_number += 1;
        }

        self.turn = mover.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CastleSide;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.turn(), Color::White);
        assert_eq!(state.en_passant_target(), None);
        assert_eq!(state.castling_rights(), CastlingRights::new());
        assert_eq!(state.fullmove_number(), 1);
        assert_eq!(state.halfmove_clock(), 0);
    }

    #[test]
    fn test_double_push_sets_target_and_single_push_clears_it() {
        let mut state = GameState::new();
        state.apply_unchecked(Move::new(sq("e2"), sq("e4")));
        assert_eq!(state.en_passant_target(), Some(sq("e3")));
        assert_eq!(state.turn(), Color::Black);

        state.apply_unchecked(Move::new(sq("g8"), sq("f6")));
        assert_eq!(state.en_passant_target(), None);
        assert_eq!(state.turn(), Color::White);
    }

    #[test]
    fn test_counters() {
        let mut state = GameState::new();
        state.apply_unchecked(Move::new(sq("g1"), sq("f3")));
        assert_eq!((state.halfmove_clock(), state.fullmove_number()), (1, 1));
        state.apply_unchecked(Move::new(sq("g8"), sq("f6")));
        assert_eq!((state.halfmove_clock(), state.fullmove_number()), (2, 2));
        state.apply_unchecked(Move::new(sq("e2"), sq("e4")));
        assert_eq!((state.halfmove_clock(), state.fullmove_number()), (0, 2));
    }

    #[test]
    fn test_rook_and_king_moves_mark_flags() {
        let mut state = GameState::new();
        state.board.set(sq("h2"), None);
        state.apply_unchecked(Move::new(sq("h1"), sq("h3")));
        assert!(state.castling.rook_moved(Color::White, CastleSide::KingSide));
        assert!(!state.castling.king_moved(Color::White));

        state.board.set(sq("e7"), None);
        state.apply_unchecked(Move::new(sq("e8"), sq("e7")));
        assert!(state.castling.king_moved(Color::Black));
        assert!(!state.castling.rook_moved(Color::Black, CastleSide::KingSide));
    }

    #[test]
    fn test_capture_on_rook_corner_marks_rook() {
        let mut state = GameState::new();
        state.board.set(sq("b7"), None);
        // Bishop g2 takes the untouched rook on a8
        state.board.set(sq("g2"), Some((Color::White, Piece::Bishop)));
        state.apply_unchecked(Move::new(sq("g2"), sq("a8")));
        assert!(state.castling.rook_moved(Color::Black, CastleSide::QueenSide));
        assert!(!state.castling.rook_moved(Color::Black, CastleSide::KingSide));
    }

    #[test]
    fn test_castling_moves_rook_and_marks_both() {
        let mut state = GameState::new();
        state.board.set(sq("f1"), None);
        state.board.set(sq("g1"), None);
        state.apply_unchecked(Move::castle(sq("e1"), sq("g1"), CastleSide::KingSide));

        assert_eq!(state.board.piece_at(sq("g1")), Some((Color::White, Piece::King)));
        assert_eq!(state.board.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
        assert!(state.board.is_empty(sq("h1")));
        assert!(state.castling.king_moved(Color::White));
        assert!(state.castling.rook_moved(Color::White, CastleSide::KingSide));
        assert!(!state.castling.rook_moved(Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn test_en_passant_capture_removes_pawn() {
        let mut state = GameState::new();
        state.apply_unchecked(Move::new(sq("e2"), sq("e4")));
        state.apply_unchecked(Move::new(sq("a7"), sq("a6")));
        state.apply_unchecked(Move::new(sq("e4"), sq("e5")));
        state.apply_unchecked(Move::new(sq("d7"), sq("d5")));
        assert_eq!(state.en_passant_target(), Some(sq("d6")));

        state.apply_unchecked(Move::en_passant(sq("e5"), sq("d6")));
        assert!(state.board.is_empty(sq("d5")));
        assert!(state.board.is_empty(sq("e5")));
        assert_eq!(state.board.piece_at(sq("d6")), Some((Color::White, Piece::Pawn)));
        assert_eq!(state.halfmove_clock(), 0);
    }
}
