//! Chess rules: board representation, move generation and game flow.
//!
//! Uses an 8×8 mailbox with pseudo-legal generation followed by a king-safety
//! filter. Supports castling, en passant, promotion and bounded undo/redo.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Game};
//!
//! let mut game = Game::new();
//! println!("Starting position has {} legal moves", game.legal_moves_for_turn().len());
//! assert!(game.apply_move_str("e2e4").unwrap());
//! assert_eq!(game.current_turn(), Color::Black);
//! ```

mod builder;
mod config;
mod error;
mod game;
mod grid;
mod history;
mod legality;
mod movegen;
mod perft;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use config::{GameConfig, LegalityMode, DEFAULT_HISTORY_CAPACITY};
pub use error::{BuildError, ConfigError, MoveParseError, SquareError};
pub use game::{Game, PromotionHandler};
pub use grid::Board;
pub use history::{History, Snapshot};
pub use legality::GameStatus;
pub use state::GameState;
pub use types::{
    king_home, CastleSide, CastlingRights, Color, Move, MoveKind, MoveList, MoveListIntoIter,
    Piece, Square, PROMOTION_PIECES,
};
