//! Move execution on the board, in place or via copy-make.

use crate::board::Board;
use crate::chess_move::{Move, MoveKind, PromotionPiece};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Apply `mv` and return the resulting board. Copy-make: `self` is not modified.
    pub fn make_move(&self, mv: Move) -> Board {
        let mut board = *self;
        board.play(mv);
        board
    }

    /// Apply `mv` in place and return the captured piece, if any.
    ///
    /// The move is trusted: pass only moves the legality evaluator produced. An
    /// empty origin leaves the board unchanged.
    pub fn play(&mut self, mv: Move) -> Option<Piece> {
        let mut piece = self.take(mv.from)?;
        let mut captured = self.take(mv.to);

        match mv.kind {
            MoveKind::Normal | MoveKind::DoublePush => {}
            MoveKind::EnPassant => {
                if let Some(victim) = mv.en_passant_victim() {
                    captured = self.take(victim);
                }
            }
            MoveKind::Castle(side) => {
                let row = mv.from.row();
                let rook_from = Square::new(row, side.rook_from_col());
                let rook_to = Square::new(row, side.rook_to_col());
                if let (Some(rook_from), Some(rook_to)) = (rook_from, rook_to) {
                    let rook = self.take(rook_from);
                    self.set(rook_to, rook);
                }
            }
            MoveKind::Promotion(promo) => {
                piece = Piece::new(promo.to_piece_kind(), piece.color());
            }
        }

        self.set(mv.to, Some(piece));
        captured
    }

    /// Replace the pawn on `sq` with `piece` of the same color.
    ///
    /// Returns `false`, leaving the board untouched, if `sq` holds no pawn.
    pub fn promote(&mut self, sq: Square, piece: PromotionPiece) -> bool {
        match self.piece_at(sq) {
            Some(pawn) if pawn.kind() == PieceKind::Pawn => {
                self.set(sq, Some(Piece::new(piece.to_piece_kind(), pawn.color())));
                true
            }
            _ => false,
        }
    }
}
