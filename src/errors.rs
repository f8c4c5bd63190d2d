//! Error types for the rules core.
//!
//! The hot path reports ordinary outcomes with sentinels (an empty move list,
//! `None` for a missing king). Errors here are reserved for caller bugs,
//! corrupted moves, bad notation and failed self-checks.

use crate::game_state::chess_types::Move;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// `unmake_move` was called with no applied move on the stack.
    #[error("undo requested with an empty move history")]
    EmptyHistory,

    /// A packed move that cannot be applied to the current position.
    #[error("corrupt move {mv:#010x}: {reason}")]
    CorruptMove { mv: Move, reason: &'static str },

    /// Square text that is not `a1`..`h8`.
    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    /// Coordinate move text that matches no legal move.
    #[error("no legal move matches {0}")]
    NoSuchMove(String),

    /// A board invariant failed during self-checking.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result type alias for rules-core operations.
pub type GameResult<T> = Result<T, GameError>;
