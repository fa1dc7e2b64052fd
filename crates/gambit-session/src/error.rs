//! Session command errors.

use gambit_core::IllegalMove;

/// Why a session command was refused.
///
/// A refused command never changes the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The move itself is not legal in the current position.
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),

    /// The game ended in checkmate or stalemate. Start a new game first.
    #[error("the game is over")]
    GameOver,

    /// A pawn is waiting to be promoted. Resolve it before moving again.
    #[error("a promotion must be resolved first")]
    PromotionPending,

    /// There is no pawn waiting to be promoted.
    #[error("no promotion is pending")]
    NoPromotionPending,

    /// There is no move to take back.
    #[error("no move to undo")]
    EmptyHistory,
}
