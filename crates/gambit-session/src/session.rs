//! A single game: position, turn, history, and status, mutated only through commands.

use tracing::{debug, info, warn};

use gambit_core::{
    Board, CastleRights, Color, GameStatus, IllegalMove, Move, MoveContext, MoveKind,
    PromotionPiece, Square, SquareSet, check_move_for_turn, game_status,
};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::record::{CapturedMaterial, MoveRecord};

/// Read-only snapshot of a session, returned by every command.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub board: &'a Board,
    pub turn: Color,
    pub status: GameStatus,
    pub winner: Option<Color>,
    pub history: &'a [MoveRecord],
    /// Square of a pawn waiting for [`GameSession::resolve_promotion`].
    pub pending_promotion: Option<Square>,
}

/// The state of one game of chess.
///
/// Commands take `&mut self` and either succeed, returning a [`SessionView`],
/// or fail with a [`SessionError`] and leave the session as it was.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    history: Vec<MoveRecord>,
    status: GameStatus,
    winner: Option<Color>,
    pending_promotion: Option<Square>,
    config: SessionConfig,
}

impl GameSession {
    /// Create a session at the starting position with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session at the starting position.
    pub fn with_config(config: SessionConfig) -> Self {
        let ctx = MoveContext::starting();
        Self {
            board: Board::starting_position(),
            turn: ctx.side_to_move,
            castling: ctx.castling,
            en_passant: ctx.en_passant,
            history: Vec::new(),
            status: GameStatus::Ongoing,
            winner: None,
            pending_promotion: None,
            config,
        }
    }

    /// Move the piece on `from` to `to` for the side to move.
    ///
    /// A pawn reaching the last row leaves the session waiting for
    /// [`resolve_promotion`](Self::resolve_promotion) unless the configuration
    /// promotes automatically. The turn does not pass until it is resolved.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<SessionView<'_>, SessionError> {
        if self.status.is_terminal() {
            warn!(%from, %to, status = %self.status, "move rejected: game over");
            return Err(SessionError::GameOver);
        }
        if let Some(square) = self.pending_promotion {
            warn!(%from, %to, %square, "move rejected: promotion pending");
            return Err(SessionError::PromotionPending);
        }

        let ctx = self.context();
        let mv = check_move_for_turn(&self.board, from, to, &ctx).inspect_err(|reason| {
            warn!(%from, %to, %reason, "move rejected");
        })?;
        let Some(moving_piece) = self.board.piece_at(from) else {
            return Err(IllegalMove::EmptyOrigin.into());
        };

        let (played, deferred) = match mv.kind {
            MoveKind::Promotion(_) => match self.config.auto_promote {
                Some(piece) => (mv.with_promotion(piece), false),
                None => (Move::new(from, to, MoveKind::Normal), true),
            },
            _ => (mv, false),
        };

        let board_before = self.board;
        let captured_piece = self.board.play(played);
        self.history.push(MoveRecord {
            from,
            to,
            kind: if deferred { mv.kind } else { played.kind },
            moving_piece,
            captured_piece,
            promotion: match played.kind {
                MoveKind::Promotion(piece) => Some(piece),
                _ => None,
            },
            board_before,
            player_before: self.turn,
            castling_before: self.castling,
            en_passant_before: self.en_passant,
        });
        debug!(
            mv = %played,
            piece = %moving_piece,
            captured = ?captured_piece,
            "move applied"
        );

        if deferred {
            debug!(square = %to, "awaiting promotion choice");
            self.pending_promotion = Some(to);
        } else {
            self.finish_turn(mv);
        }
        Ok(self.view())
    }

    /// Turn the waiting pawn into `piece` and pass the turn.
    pub fn resolve_promotion(&mut self, piece: PromotionPiece) -> Result<SessionView<'_>, SessionError> {
        let Some(square) = self.pending_promotion else {
            warn!(?piece, "promotion rejected: none pending");
            return Err(SessionError::NoPromotionPending);
        };
        let Some(record) = self.history.last_mut() else {
            return Err(SessionError::NoPromotionPending);
        };
        if !self.board.promote(square, piece) {
            return Err(SessionError::NoPromotionPending);
        }

        record.kind = MoveKind::Promotion(piece);
        record.promotion = Some(piece);
        let mv = record.as_move();
        self.pending_promotion = None;
        debug!(%square, ?piece, "promotion resolved");

        self.finish_turn(mv);
        Ok(self.view())
    }

    /// Take back the last move, restoring the position and context it was played from.
    pub fn undo_move(&mut self) -> Result<SessionView<'_>, SessionError> {
        let Some(record) = self.history.pop() else {
            warn!("undo rejected: history empty");
            return Err(SessionError::EmptyHistory);
        };

        self.board = record.board_before;
        self.turn = record.player_before;
        self.castling = record.castling_before;
        self.en_passant = record.en_passant_before;
        self.pending_promotion = None;
        self.winner = None;
        self.status = game_status(&self.board, &self.context());
        debug!(mv = %record.as_move(), remaining = self.history.len(), "move undone");

        Ok(self.view())
    }

    /// Start over from the starting position, keeping the configuration.
    pub fn new_game(&mut self) -> SessionView<'_> {
        *self = Self::with_config(self.config);
        info!("new game");
        self.view()
    }

    /// Squares the piece on `from` may move to.
    ///
    /// Empty unless `from` holds a piece of the side to move, and always
    /// empty once the game is over or while a promotion is pending.
    pub fn legal_moves_from(&self, from: Square) -> SquareSet {
        if self.status.is_terminal() || self.pending_promotion.is_some() {
            return SquareSet::EMPTY;
        }
        if self.board.color_at(from) != Some(self.turn) {
            return SquareSet::EMPTY;
        }
        gambit_core::legal_moves_from(&self.board, from, &self.context())
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            board: &self.board,
            turn: self.turn,
            status: self.status,
            winner: self.winner,
            history: &self.history,
            pending_promotion: self.pending_promotion,
        }
    }

    /// Pieces of `color` captured so far.
    pub fn captured(&self, color: Color) -> CapturedMaterial {
        self.history
            .iter()
            .filter_map(|record| record.captured_piece)
            .filter(|piece| piece.color() == color)
            .map(|piece| piece.kind())
            .collect()
    }

    /// Legality context for the side to move.
    pub fn context(&self) -> MoveContext {
        MoveContext {
            side_to_move: self.turn,
            castling: self.castling,
            en_passant: self.en_passant,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Pass the turn after `mv` and classify the new position.
    fn finish_turn(&mut self, mv: Move) {
        let ctx = self.context().after(mv);
        self.turn = ctx.side_to_move;
        self.castling = ctx.castling;
        self.en_passant = ctx.en_passant;
        self.status = game_status(&self.board, &ctx);
        self.winner = self.status.winner(self.turn);

        match self.status {
            GameStatus::Ongoing => {}
            GameStatus::Check => info!(side = %self.turn, "check"),
            GameStatus::Checkmate => info!(winner = ?self.winner, "checkmate"),
            GameStatus::Stalemate => info!("stalemate"),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gambit_core::{Piece, PieceKind};

    fn play(session: &mut GameSession, moves: &[(Square, Square)]) {
        for &(from, to) in moves {
            session.apply_move(from, to).unwrap();
        }
    }

    #[test]
    fn new_session_is_at_start() {
        let session = GameSession::new();
        assert_eq!(*session.board(), Board::starting_position());
        assert_eq!(session.turn(), Color::White);
        assert_eq!(session.status(), GameStatus::Ongoing);
        assert_eq!(session.castling(), CastleRights::ALL);
        assert!(session.history().is_empty());
    }

    #[test]
    fn apply_move_passes_turn_and_sets_en_passant() {
        let mut session = GameSession::new();
        let view = session.apply_move(Square::E2, Square::E4).unwrap();
        assert_eq!(view.turn, Color::Black);
        assert_eq!(view.history.len(), 1);
        assert_eq!(view.board.piece_at(Square::E4), Some(Piece::WHITE_PAWN));
        assert_eq!(session.en_passant(), Some(Square::E3));

        session.apply_move(Square::G8, Square::F6).unwrap();
        assert_eq!(session.en_passant(), None);
    }

    #[test]
    fn rejected_move_leaves_session_unchanged() {
        let mut session = GameSession::new();
        let before = session.clone();
        assert_eq!(
            session.apply_move(Square::E2, Square::E5).unwrap_err(),
            SessionError::Illegal(IllegalMove::InvalidShape)
        );
        assert_eq!(
            session.apply_move(Square::E7, Square::E5).unwrap_err(),
            SessionError::Illegal(IllegalMove::NotYourTurn)
        );
        assert_eq!(
            session.apply_move(Square::E4, Square::E5).unwrap_err(),
            SessionError::Illegal(IllegalMove::EmptyOrigin)
        );
        assert_eq!(*session.board(), *before.board());
        assert_eq!(session.turn(), before.turn());
        assert!(session.history().is_empty());
    }

    #[test]
    fn king_move_revokes_castling() {
        let mut session = GameSession::new();
        play(
            &mut session,
            &[(Square::E2, Square::E4), (Square::E7, Square::E5), (Square::E1, Square::E2)],
        );
        assert_eq!(session.castling(), CastleRights::BLACK_BOTH);
    }

    #[test]
    fn captured_material_tracks_history() {
        let mut session = GameSession::new();
        play(
            &mut session,
            &[
                (Square::E2, Square::E4),
                (Square::D7, Square::D5),
                (Square::E4, Square::D5),
                (Square::D8, Square::D5),
            ],
        );
        let black = session.captured(Color::Black);
        assert_eq!(black.count(PieceKind::Pawn), 1);
        assert_eq!(black.points(), 1);
        assert_eq!(session.captured(Color::White).count(PieceKind::Pawn), 1);
    }

    #[test]
    fn legal_moves_only_for_side_to_move() {
        let session = GameSession::new();
        assert_eq!(session.legal_moves_from(Square::G1).len(), 2);
        assert!(session.legal_moves_from(Square::G8).is_empty());
    }

    #[test]
    fn undo_on_empty_history() {
        let mut session = GameSession::new();
        assert_eq!(session.undo_move().unwrap_err(), SessionError::EmptyHistory);
        assert_eq!(session.turn(), Color::White);
    }

    #[test]
    fn resolve_without_pending_promotion() {
        let mut session = GameSession::new();
        assert_eq!(
            session.resolve_promotion(PromotionPiece::Queen).unwrap_err(),
            SessionError::NoPromotionPending
        );
    }
}
