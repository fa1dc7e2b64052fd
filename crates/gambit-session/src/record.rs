//! Move history entries and captured material.

use gambit_core::{Board, CastleRights, Color, Move, MoveKind, Piece, PieceKind, PromotionPiece, Square};

/// One committed move, with everything needed to take it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// How the move was classified. A pending promotion carries the default
    /// queen until [`promotion`](Self::promotion) is filled in.
    pub kind: MoveKind,
    pub moving_piece: Piece,
    /// The piece removed from the board, including a pawn taken en passant.
    pub captured_piece: Option<Piece>,
    /// The piece a pawn became, once chosen.
    pub promotion: Option<PromotionPiece>,
    pub board_before: Board,
    pub player_before: Color,
    pub castling_before: CastleRights,
    pub en_passant_before: Option<Square>,
}

impl MoveRecord {
    /// The move as played.
    #[inline]
    pub fn as_move(&self) -> Move {
        Move::new(self.from, self.to, self.kind)
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}

/// Pieces of one color taken off the board so far, by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapturedMaterial {
    counts: [u32; PieceKind::COUNT],
}

impl CapturedMaterial {
    /// Number of captured pieces of `kind`.
    #[inline]
    pub fn count(&self, kind: PieceKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Total number of captured pieces.
    pub fn len(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Conventional material value of everything captured.
    pub fn points(&self) -> u32 {
        PieceKind::ALL
            .into_iter()
            .map(|kind| self.count(kind) * kind.points())
            .sum()
    }

    /// Captured kinds with their counts, pawns first, skipping kinds never taken.
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, u32)> + '_ {
        PieceKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|&(_, n)| n > 0)
    }
}

impl FromIterator<PieceKind> for CapturedMaterial {
    fn from_iter<I: IntoIterator<Item = PieceKind>>(iter: I) -> Self {
        let mut material = CapturedMaterial::default();
        for kind in iter {
            material.counts[kind.index()] += 1;
        }
        material
    }
}
