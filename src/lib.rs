#[macro_use]
mod logging;

pub mod board;
pub mod sync;

pub use board::{
    Board, Color, Game, GameConfig, GameState, GameStatus, LegalityMode, Move, Piece, Square,
};
pub use sync::SharedGame;
