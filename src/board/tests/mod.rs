//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation correctness
//! - `undo_redo.rs` - History round trips through the game API
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod perft;

use crate::board::{BoardBuilder, Color, GameState, Piece, Square};

/// Load a position from the first four FEN fields. Test fixtures only.
///
/// Castling letters that are absent mark the matching king or rook as moved.
fn position(fen: &str) -> GameState {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().expect("placement field");
    let side = fields.next().unwrap_or("w");
    let castling = fields.next().unwrap_or("-");
    let en_passant = fields.next().unwrap_or("-");

    let mut builder = BoardBuilder::new();
    for (row, rank) in placement.split('/').enumerate() {
        let mut col = 0;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let piece = Piece::from_char(c).expect("piece letter");
            let square = Square::new(row, col).expect("square on board");
            builder = builder.piece(square, color, piece);
            col += 1;
        }
    }

    if side == "b" {
        builder = builder.side_to_move(Color::Black);
    }
    for c in castling.chars() {
        builder = match c {
            'K' => builder.castle_kingside(Color::White),
            'Q' => builder.castle_queenside(Color::White),
            'k' => builder.castle_kingside(Color::Black),
            'q' => builder.castle_queenside(Color::Black),
            _ => builder,
        };
    }
    if en_passant != "-" {
        builder = builder.en_passant(en_passant.parse().expect("en passant square"));
    }
    builder.build().expect("valid test position")
}

fn sq(s: &str) -> Square {
    s.parse().expect("square notation")
}
