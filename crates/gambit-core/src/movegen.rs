//! Legal move generation by exhaustive destination testing.
//!
//! Every candidate goes through the legality evaluator, so a single query costs
//! up to 64 evaluations, each of which may simulate the move and scan the board
//! for attackers. That is fine at interactive speed but far too slow to drive
//! a search.

use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece};
use crate::legality::{MoveContext, check_move, is_legal_move};
use crate::square::Square;
use crate::square_set::SquareSet;

/// Return every square the piece on `from` may legally move to.
///
/// Empty if `from` holds no piece. The turn is not enforced: a piece of the
/// side not on move is evaluated as if it were that side's turn.
pub fn legal_moves_from(board: &Board, from: Square, ctx: &MoveContext) -> SquareSet {
    if board.is_empty_at(from) {
        return SquareSet::EMPTY;
    }
    Square::all()
        .filter(|&to| is_legal_move(board, from, to, ctx))
        .collect()
}

/// Return `true` if the side to move has at least one legal move.
pub fn has_legal_move(board: &Board, ctx: &MoveContext) -> bool {
    board
        .occupied_by(ctx.side_to_move)
        .any(|from| Square::all().any(|to| is_legal_move(board, from, to, ctx)))
}

/// Return every legal move for the side to move.
///
/// Promotions appear once per promotion piece.
pub fn legal_moves(board: &Board, ctx: &MoveContext) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in board.occupied_by(ctx.side_to_move) {
        for to in Square::all() {
            let Ok(mv) = check_move(board, from, to, ctx) else {
                continue;
            };
            if mv.is_promotion() {
                moves.extend(PromotionPiece::ALL.map(|piece| mv.with_promotion(piece)));
            } else {
                moves.push(mv);
            }
        }
    }
    moves
}
