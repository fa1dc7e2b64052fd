//! Rejection reasons for move attempts.

/// Why a proposed move was not accepted.
///
/// Rejections are expected game conditions, not faults: callers match on the
/// reason to give feedback and carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum IllegalMove {
    /// A coordinate lies outside the 8x8 board.
    #[error("square is off the board")]
    OutOfBounds,
    /// The origin square holds no piece.
    #[error("no piece on the origin square")]
    EmptyOrigin,
    /// The destination holds a piece of the mover's own color.
    #[error("cannot capture one's own piece")]
    OwnPieceCapture,
    /// The piece cannot move in that pattern.
    #[error("the piece does not move that way")]
    InvalidShape,
    /// A piece stands between the origin and the destination.
    #[error("the path is blocked")]
    PathBlocked,
    /// The move would leave the mover's king attacked.
    #[error("the move leaves the king in check")]
    SelfCheck,
    /// The piece belongs to the side not on move.
    #[error("it is not this side's turn")]
    NotYourTurn,
}
