use std::collections::VecDeque;

use super::{GameState, Move, DEFAULT_HISTORY_CAPACITY};

/// A saved position plus the move that was played from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub state: GameState,
    pub last_move: Option<Move>,
}

/// Bounded undo/redo stacks of full snapshots.
///
/// The most recent entry sits at the front of each deque. When the undo
/// stack grows past its capacity the oldest snapshot is dropped from the back.
#[derive(Clone, Debug)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: VecDeque<Snapshot>,
    capacity: usize,
}

impl History {
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        History {
            undo: VecDeque::with_capacity(capacity),
            redo: VecDeque::new(),
            capacity,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Save `state` as the newest undo entry and forget every redo entry.
    pub fn record(&mut self, state: &GameState) {
        self.push_undo(Snapshot {
            state: state.clone(),
            last_move: None,
        });
        self.redo.clear();
    }

    /// Attach the move played from the newest undo entry.
    pub fn set_last_move(&mut self, mv: Move) {
        if let Some(top) = self.undo.front_mut() {
            top.last_move = Some(mv);
        }
    }

    /// Move that produced the live position, if it is still in history.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.undo.front().and_then(|s| s.last_move)
    }

    /// Step `live` back one snapshot. Returns false if there is nothing to
    /// undo.
    pub fn undo(&mut self, live: &mut GameState) -> bool {
        let Some(prev) = self.undo.pop_front() else {
            return false;
        };
        let current = std::mem::replace(live, prev.state);
        self.redo.push_front(Snapshot {
            state: current,
            last_move: prev.last_move,
        });
        true
    }

    /// Step `live` forward one snapshot. Returns false if there is nothing to
    /// redo.
    pub fn redo(&mut self, live: &mut GameState) -> bool {
        let Some(next) = self.redo.pop_front() else {
            return false;
        };
        let current = std::mem::replace(live, next.state);
        self.push_undo(Snapshot {
            state: current,
            last_move: next.last_move,
        });
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo.push_front(snapshot);
        while self.undo.len() > self.capacity {
            self.undo.pop_back();
            trace!("history full, dropped oldest snapshot (capacity {})", self.capacity);
        }
    }
}

impl Default for History {
    fn default() -> Self {
        History::new(DEFAULT_HISTORY_CAPACITY)
    }
}
