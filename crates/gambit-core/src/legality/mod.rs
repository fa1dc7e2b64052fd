//! Move legality: is one candidate move playable in a given position?

mod king;
mod pawns;

use tracing::trace;

use crate::attacks::piece_shape;
use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::check::is_in_check;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::error::IllegalMove;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::castle;
use self::pawns::pawn_move;

/// The game state, beyond piece placement, that legality depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveContext {
    /// Side whose turn it is.
    pub side_to_move: Color,
    /// Castling eligibility.
    pub castling: CastleRights,
    /// Square a pawn skipped with a double step on the previous move.
    pub en_passant: Option<Square>,
}

impl MoveContext {
    /// Context at the start of a game: White to move, all rights, no en passant.
    pub const fn starting() -> MoveContext {
        MoveContext {
            side_to_move: Color::White,
            castling: CastleRights::ALL,
            en_passant: None,
        }
    }

    /// Context for `side_to_move` with no castling rights and no en passant target.
    pub const fn bare(side_to_move: Color) -> MoveContext {
        MoveContext {
            side_to_move,
            castling: CastleRights::NONE,
            en_passant: None,
        }
    }

    /// Context after `mv` has been played: the turn passes, castle rights
    /// shrink, and the en passant target is set only by a double push.
    pub fn after(self, mv: Move) -> MoveContext {
        MoveContext {
            side_to_move: self.side_to_move.flip(),
            castling: self.castling.after_move(mv.from, mv.to),
            en_passant: mv.skipped_square(),
        }
    }
}

impl Default for MoveContext {
    fn default() -> Self {
        MoveContext::starting()
    }
}

/// Decide whether moving the piece on `from` to `to` is legal.
///
/// On success the move comes back classified (castle, en passant, double push,
/// promotion). A pawn reaching the last row is classified as a queen
/// promotion; callers pick another piece with [`Move::with_promotion`].
///
/// The turn is not enforced here: the piece on `from` moves as its own color.
/// Use [`check_move_for_turn`] to also reject the side not on move.
pub fn check_move(
    board: &Board,
    from: Square,
    to: Square,
    ctx: &MoveContext,
) -> Result<Move, IllegalMove> {
    let result = evaluate(board, from, to, ctx);
    if let Err(reason) = result {
        trace!(%from, %to, %reason, "move rejected");
    }
    result
}

/// Like [`check_move`], additionally rejecting pieces of the side not on move.
pub fn check_move_for_turn(
    board: &Board,
    from: Square,
    to: Square,
    ctx: &MoveContext,
) -> Result<Move, IllegalMove> {
    match board.color_at(from) {
        Some(color) if color != ctx.side_to_move => {
            trace!(%from, %to, "move rejected: not this side's turn");
            Err(IllegalMove::NotYourTurn)
        }
        _ => check_move(board, from, to, ctx),
    }
}

/// Return `true` if moving the piece on `from` to `to` is legal.
pub fn is_legal_move(board: &Board, from: Square, to: Square, ctx: &MoveContext) -> bool {
    evaluate(board, from, to, ctx).is_ok()
}

fn evaluate(
    board: &Board,
    from: Square,
    to: Square,
    ctx: &MoveContext,
) -> Result<Move, IllegalMove> {
    let piece = board.piece_at(from).ok_or(IllegalMove::EmptyOrigin)?;
    let us = piece.color();
    if board.color_at(to) == Some(us) {
        return Err(IllegalMove::OwnPieceCapture);
    }

    let kind = shape_kind(board, piece, from, to, ctx)?;
    let mv = Move::new(from, to, kind);

    if is_in_check(&board.make_move(mv), us) {
        return Err(IllegalMove::SelfCheck);
    }
    Ok(mv)
}

/// Apply the special-move short-circuits, then the per-kind shape rule.
fn shape_kind(
    board: &Board,
    piece: Piece,
    from: Square,
    to: Square,
    ctx: &MoveContext,
) -> Result<MoveKind, IllegalMove> {
    let (d_row, d_col) = from.delta(to);
    match piece.kind() {
        PieceKind::King if d_row == 0 && d_col.abs() == 2 => castle(board, from, to, piece.color(), ctx),
        PieceKind::Pawn => pawn_move(board, from, to, piece.color(), ctx),
        kind => piece_shape(board, kind, from, to).map(|()| MoveKind::Normal),
    }
}
