//! Pawn pushes, captures, en passant, and promotion.

use crate::board::Board;
use crate::chess_move::{MoveKind, PromotionPiece};
use crate::color::Color;
use crate::error::IllegalMove;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveContext;

/// Shape rule for a pawn of color `us` moving from `from` to `to`.
pub(super) fn pawn_move(
    board: &Board,
    from: Square,
    to: Square,
    us: Color,
    ctx: &MoveContext,
) -> Result<MoveKind, IllegalMove> {
    let (d_row, d_col) = from.delta(to);
    let forward = us.forward();

    let kind = match (d_row, d_col.abs()) {
        (r, 0) if r == forward => {
            if !board.is_empty_at(to) {
                return Err(IllegalMove::PathBlocked);
            }
            MoveKind::Normal
        }
        (r, 0) if r == 2 * forward && from.row() == us.pawn_row() => {
            let skipped = from.offset(forward, 0).ok_or(IllegalMove::InvalidShape)?;
            if !board.is_empty_at(skipped) || !board.is_empty_at(to) {
                return Err(IllegalMove::PathBlocked);
            }
            MoveKind::DoublePush
        }
        (r, 1) if r == forward => {
            if is_en_passant(board, from, to, us, ctx) {
                return Ok(MoveKind::EnPassant);
            }
            if board.color_at(to) != Some(us.flip()) {
                return Err(IllegalMove::InvalidShape);
            }
            MoveKind::Normal
        }
        _ => return Err(IllegalMove::InvalidShape),
    };

    if to.row() == us.promotion_row() {
        Ok(MoveKind::Promotion(PromotionPiece::Queen))
    } else {
        Ok(kind)
    }
}

/// A diagonal step onto the en passant target by the side on move, with the
/// enemy pawn that just double-stepped standing beside the capturer.
fn is_en_passant(board: &Board, from: Square, to: Square, us: Color, ctx: &MoveContext) -> bool {
    if ctx.side_to_move != us || ctx.en_passant != Some(to) {
        return false;
    }
    Square::new(from.row(), to.col())
        .and_then(|victim| board.piece_at(victim))
        .is_some_and(|piece| piece == Piece::new(PieceKind::Pawn, us.flip()))
}
