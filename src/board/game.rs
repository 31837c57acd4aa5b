//! The game façade: one live position, its history and the promotion hook.

use std::fmt;

use super::error::{ConfigError, MoveParseError};
use super::{
    Board, Color, GameConfig, GameState, GameStatus, History, Move, MoveList, Piece,
};

/// Picks the piece a pawn promotes to when the move itself does not say.
///
/// Returning `None` declines, and the pawn becomes a queen.
pub trait PromotionHandler: Send {
    fn choose_promotion(&mut self, color: Color) -> Option<Piece>;
}

impl<F> PromotionHandler for F
where
    F: FnMut(Color) -> Option<Piece> + Send,
{
    fn choose_promotion(&mut self, color: Color) -> Option<Piece> {
        self(color)
    }
}

/// A chess game from the standard starting position.
///
/// # Example
/// ```
/// use chess_rules::{Game, GameStatus};
///
/// let mut game = Game::new();
/// for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
///     assert!(game.apply_move_str(mv).unwrap());
/// }
/// assert!(matches!(game.status(), GameStatus::Checkmate { .. }));
/// ```
pub struct Game {
    state: GameState,
    history: History,
    config: GameConfig,
    promotion_handler: Option<Box<dyn PromotionHandler>>,
}

impl Game {
    /// New game with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Game::from_state(GameState::new(), GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Game::from_state(GameState::new(), config))
    }

    /// Start from an arbitrary position, usually one made by
    /// [`BoardBuilder`](super::BoardBuilder). `restart` still returns to the
    /// standard starting position.
    #[must_use]
    pub fn from_state(state: GameState, config: GameConfig) -> Self {
        Game {
            state,
            history: History::new(config.history_capacity),
            config,
            promotion_handler: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn current_board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.state.turn()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn legal_moves_for_turn(&self) -> MoveList {
        self.state.legal_moves(self.state.turn(), self.config.legality)
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.state.is_in_check(color)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status(self.config.legality)
    }

    /// Play `candidate` if it matches a legal move for the side to move.
    ///
    /// Matching is by origin and destination only, so the caller does not
    /// need to know whether the move castles or captures en passant. Returns
    /// false and leaves the game untouched when no legal move matches.
    pub fn apply_move_if_legal(&mut self, candidate: Move) -> bool {
        let Some(legal) = self.legal_moves_for_turn().find(candidate) else {
            debug!("rejected {} for {}", candidate, self.state.turn());
            return false;
        };

        self.history.record(&self.state);
        let mv = if legal.is_promotion() {
            legal.with_promotion(self.choose_promotion(candidate))
        } else {
            legal
        };
        self.history.set_last_move(mv);
        self.state.apply_unchecked(mv);
        debug!("applied {:?}", mv);
        true
    }

    /// Parse coordinate notation and play it.
    ///
    /// A malformed string is an error. A well-formed but illegal move is
    /// `Ok(false)`.
    pub fn apply_move_str(&mut self, text: &str) -> Result<bool, MoveParseError> {
        let candidate: Move = text.parse()?;
        Ok(self.apply_move_if_legal(candidate))
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.state);
        if undone {
            debug!("undo, {} to move", self.state.turn());
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.state);
        if redone {
            debug!("redo, {} to move", self.state.turn());
        }
        redone
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The move that led to the current position
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last_move()
    }

    /// Back to the starting position with empty history. The promotion
    /// handler and configuration are kept.
    pub fn restart(&mut self) {
        self.state = GameState::new();
        self.history.clear();
        info!("game restarted");
    }

    pub fn set_promotion_handler<H>(&mut self, handler: H)
    where
        H: PromotionHandler + 'static,
    {
        self.promotion_handler = Some(Box::new(handler));
    }

    pub fn clear_promotion_handler(&mut self) {
        self.promotion_handler = None;
    }

    fn choose_promotion(&mut self, candidate: Move) -> Piece {
        if let Some(piece) = candidate.promotion().filter(|p| p.is_promotion_target()) {
            return piece;
        }
        let color = self.state.turn();
        self.promotion_handler
            .as_mut()
            .and_then(|h| h.choose_promotion(color))
            .filter(|p| p.is_promotion_target())
            .unwrap_or(Piece::Queen)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("history", &self.history)
            .field("config", &self.config)
            .field("promotion_handler", &self.promotion_handler.is_some())
            .finish()
    }
}
