//! Error types for chess board operations.
//!
//! Illegal moves and empty undo/redo history are not errors: those are
//! reported as `false` by the game API.

use std::fmt;

use super::{Color, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Not of the form `[a-h][1-8]`
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for coordinate move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters, ignoring whitespace)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Promotion suffix is not one of q, r, b, n
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for positions rejected by `BoardBuilder::build`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Each side needs exactly one king
    KingCount { color: Color, found: usize },
    /// Pawns cannot stand on the first or last rank
    PawnOnBackRank { square: Square },
    /// En passant target must be on the third or sixth rank and empty
    InvalidEnPassant { square: Square },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            BuildError::PawnOnBackRank { square } => {
                write!(f, "Pawn on back rank at {square}")
            }
            BuildError::InvalidEnPassant { square } => {
                write!(f, "Invalid en passant target {square}")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Error type for invalid game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// History capacity must be at least 1
    ZeroHistoryCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroHistoryCapacity => {
                write!(f, "History capacity must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
