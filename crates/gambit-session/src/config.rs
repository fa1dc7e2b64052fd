//! Session configuration.

use gambit_core::PromotionPiece;

/// Knobs a host can set when creating a [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Piece to promote to without asking. `None` leaves the session waiting
    /// for [`resolve_promotion`](crate::GameSession::resolve_promotion).
    pub auto_promote: Option<PromotionPiece>,
}
