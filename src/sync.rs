//! Shared access to a game across threads.
//!
//! `Game` itself is single-owner. `SharedGame` wraps it in a mutex so a UI
//! thread and analysis workers can share one game without racing on it.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::{Game, GameState, Move};

/// A cloneable, thread-safe handle to one [`Game`].
///
/// Every operation takes the lock for its whole duration, so moves, undo and
/// redo from different threads are applied one at a time.
#[derive(Clone, Debug)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    /// Lock the game for a sequence of operations.
    pub fn lock(&self) -> MutexGuard<'_, Game> {
        self.0.lock()
    }

    /// Run `f` with the game locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.0.lock())
    }

    pub fn apply_move_if_legal(&self, mv: Move) -> bool {
        self.0.lock().apply_move_if_legal(mv)
    }

    /// An independent copy of the live position for analysis.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.0.lock().state().clone()
    }
}

impl Default for SharedGame {
    fn default() -> Self {
        SharedGame::new(Game::new())
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::board::{Color, LegalityMode};

    #[test]
    fn test_shared_game_clone_sees_moves() {
        let shared = SharedGame::default();
        let other = shared.clone();
        assert!(shared.apply_move_if_legal("e2e4".parse().unwrap()));
        assert_eq!(other.lock().current_turn(), Color::Black);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let shared = SharedGame::default();
        let snapshot = shared.snapshot();
        shared.with(|game| game.apply_move_str("d2d4").unwrap());
        assert_eq!(snapshot, GameState::new());
        assert_ne!(shared.snapshot(), snapshot);
    }

    #[test]
    fn test_workers_analyse_while_game_continues() {
        let shared = SharedGame::default();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let worker = shared.clone();
                thread::spawn(move || worker.snapshot().perft(2, LegalityMode::Reference))
            })
            .collect();
        shared.with(|game| game.apply_move_str("g1f3").unwrap());

        for handle in handles {
            let nodes = handle.join().unwrap();
            // Either the start position or the one after g1f3
            assert!(nodes == 400 || nodes == 440, "unexpected count {nodes}");
        }
    }

    #[test]
    fn test_concurrent_moves_are_serialized() {
        let shared = SharedGame::default();
        let moves = ["e2e4", "e7e5"];
        let handles: Vec<_> = moves
            .iter()
            .map(|text| {
                let worker = shared.clone();
                let mv: Move = text.parse().unwrap();
                thread::spawn(move || worker.apply_move_if_legal(mv))
            })
            .collect();
        let applied: usize = handles
            .into_iter()
            .map(|h| usize::from(h.join().unwrap()))
            .sum();
        // e7e5 only succeeds if it runs second
        assert!(applied == 1 || applied == 2);
        let undo_depth = shared.with(|game| {
            let mut n = 0;
            while game.undo() {
                n += 1;
            }
            n
        });
        assert_eq!(undo_depth, applied);
    }
}
