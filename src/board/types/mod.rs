//! Core chess types.
//!
//! This module contains the value types shared by the whole engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (row, column) board coordinate
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{king_home, CastleSide, CastlingRights};
pub use moves::{Move, MoveKind, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PROMOTION_PIECES};
pub use square::Square;
