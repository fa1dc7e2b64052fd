//! Classified chess moves.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionPiece {
    /// All promotion pieces, strongest first.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }
}

impl TryFrom<PieceKind> for PromotionPiece {
    type Error = PieceKind;

    /// Pawns and kings are not promotion targets; they come back as the error.
    fn try_from(kind: PieceKind) -> Result<PromotionPiece, PieceKind> {
        match kind {
            PieceKind::Knight => Ok(PromotionPiece::Knight),
            PieceKind::Bishop => Ok(PromotionPiece::Bishop),
            PieceKind::Rook => Ok(PromotionPiece::Rook),
            PieceKind::Queen => Ok(PromotionPiece::Queen),
            PieceKind::Pawn | PieceKind::King => Err(kind),
        }
    }
}

/// What a legal move does beyond relocating one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A quiet move or an ordinary capture.
    Normal,
    /// A pawn's two-square advance from its starting row.
    DoublePush,
    /// A pawn capture onto the en passant target.
    EnPassant,
    /// King and rook move together.
    Castle(CastleSide),
    /// A pawn reaches the farthest row and becomes `PromotionPiece`.
    Promotion(PromotionPiece),
}

/// A move from one square to another, classified by the legality evaluator.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Move {
        Move { from, to, kind }
    }

    /// Return the same move with a different promotion choice.
    ///
    /// Non-promotion moves are returned unchanged.
    pub const fn with_promotion(self, piece: PromotionPiece) -> Move {
        match self.kind {
            MoveKind::Promotion(_) => Move::new(self.from, self.to, MoveKind::Promotion(piece)),
            _ => self,
        }
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion(_))
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    /// Square of the piece this move captures, if the capture is not on `to`.
    ///
    /// En passant removes the pawn beside the origin, on the destination's column.
    pub fn en_passant_victim(self) -> Option<Square> {
        match self.kind {
            MoveKind::EnPassant => Square::new(self.from.row(), self.to.col()),
            _ => None,
        }
    }

    /// Square the pawn skipped over, for a double push.
    pub fn skipped_square(self) -> Option<Square> {
        match self.kind {
            MoveKind::DoublePush => Square::new((self.from.row() + self.to.row()) / 2, self.from.col()),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let MoveKind::Promotion(piece) = self.kind {
            write!(f, "{}", piece.to_piece_kind().symbol())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?})", self, self.kind)
    }
}
