//! Game configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default number of snapshots kept on the undo stack.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// How faithfully the legality filter simulates a candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LegalityMode {
    /// Simulate only the from→to relocation when testing king safety. En
    /// passant captures are tested with the captured pawn still on the board,
    /// castling is tested as a bare king move, and a square counts as
    /// attacked only when an attacks-only pseudo-legal move lands on it.
    #[default]
    Reference,
    /// Also lift the pawn taken en passant and slide the castling rook in the
    /// simulation, and count pawn diagonals as attacks on empty squares.
    Strict,
}

/// Settings for a [`Game`](super::Game).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Maximum undo depth; the oldest snapshot is dropped beyond this
    pub history_capacity: usize,
    pub legality: LegalityMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            legality: LegalityMode::Reference,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    #[must_use]
    pub const fn with_legality(mut self, mode: LegalityMode) -> Self {
        self.legality = mode;
        self
    }

    /// Check the configuration for values the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        Ok(())
    }
}
