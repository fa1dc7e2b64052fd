//! Piece geometry: which squares a piece reaches from where it stands.
//!
//! Shape rules ignore check. They answer whether the pattern is right for the
//! piece and whether the squares strictly between origin and target are empty.

use crate::board::Board;
use crate::color::Color;
use crate::error::IllegalMove;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Return `true` if `(d_row, d_col)` is a knight jump.
#[inline]
pub(crate) fn knight_shape(d_row: i8, d_col: i8) -> bool {
    let (r, c) = (d_row.abs(), d_col.abs());
    (r == 1 && c == 2) || (r == 2 && c == 1)
}

/// Return `true` if `(d_row, d_col)` is a single king step.
#[inline]
pub(crate) fn king_shape(d_row: i8, d_col: i8) -> bool {
    d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0)
}

/// Return `true` if every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a row, column, or diagonal.
pub(crate) fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    let step = (d_row.signum(), d_col.signum());
    let mut sq = from;
    loop {
        match sq.offset(step.0, step.1) {
            Some(next) if next == to => return true,
            Some(next) if board.is_empty_at(next) => sq = next,
            _ => return false,
        }
    }
}

/// Shape rule for sliding pieces.
///
/// `diagonal` and `straight` select the bishop and rook lines; a queen uses both.
pub(crate) fn slide(
    board: &Board,
    from: Square,
    to: Square,
    diagonal: bool,
    straight: bool,
) -> Result<(), IllegalMove> {
    let (d_row, d_col) = from.delta(to);
    let on_diagonal = d_row != 0 && d_row.abs() == d_col.abs();
    let on_line = (d_row == 0) != (d_col == 0);
    if !((diagonal && on_diagonal) || (straight && on_line)) {
        return Err(IllegalMove::InvalidShape);
    }
    if path_clear(board, from, to) {
        Ok(())
    } else {
        Err(IllegalMove::PathBlocked)
    }
}

/// Shape rule for every piece kind except the pawn, whose moves depend on
/// occupancy and direction.
pub(crate) fn piece_shape(
    board: &Board,
    kind: PieceKind,
    from: Square,
    to: Square,
) -> Result<(), IllegalMove> {
    let (d_row, d_col) = from.delta(to);
    match kind {
        PieceKind::Knight if knight_shape(d_row, d_col) => Ok(()),
        PieceKind::King if king_shape(d_row, d_col) => Ok(()),
        PieceKind::Knight | PieceKind::King | PieceKind::Pawn => Err(IllegalMove::InvalidShape),
        PieceKind::Bishop => slide(board, from, to, true, false),
        PieceKind::Rook => slide(board, from, to, false, true),
        PieceKind::Queen => slide(board, from, to, true, true),
    }
}

/// Return `true` if a pawn of `color` on `from` attacks `target`.
///
/// Pawns attack one square diagonally forward whether or not it is occupied.
#[inline]
pub(crate) fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    let (d_row, d_col) = from.delta(target);
    d_row == color.forward() && d_col.abs() == 1
}

/// Return `true` if `piece` standing on `from` attacks `target`.
pub fn attacks(board: &Board, piece: Piece, from: Square, target: Square) -> bool {
    match piece.kind() {
        PieceKind::Pawn => pawn_attacks(piece.color(), from, target),
        kind => piece_shape(board, kind, from, target).is_ok(),
    }
}

/// Return `true` if any piece of `by` attacks `sq`.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    board
        .pieces()
        .any(|(from, piece)| piece.color() == by && attacks(board, piece, from, sq))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_jumps() {
        assert!(knight_shape(2, 1));
        assert!(knight_shape(-1, -2));
        assert!(!knight_shape(2, 2));
        assert!(!knight_shape(0, 1));
    }

    #[test]
    fn king_steps() {
        assert!(king_shape(1, 1));
        assert!(king_shape(0, -1));
        assert!(!king_shape(0, 0));
        assert!(!king_shape(0, 2));
    }

    #[test]
    fn rook_blocked_by_own_pawn() {
        let board = Board::starting_position();
        assert_eq!(
            piece_shape(&board, PieceKind::Rook, Square::A1, Square::A8),
            Err(IllegalMove::PathBlocked)
        );
        assert_eq!(
            piece_shape(&board, PieceKind::Rook, Square::A1, Square::B2),
            Err(IllegalMove::InvalidShape)
        );
    }

    #[test]
    fn queen_combines_lines() {
        let board = Board::from_pieces([(Square::D4, Piece::WHITE_QUEEN)]);
        assert!(piece_shape(&board, PieceKind::Queen, Square::D4, Square::H8).is_ok());
        assert!(piece_shape(&board, PieceKind::Queen, Square::D4, Square::D1).is_ok());
        assert!(piece_shape(&board, PieceKind::Queen, Square::D4, Square::A4).is_ok());
        assert_eq!(
            piece_shape(&board, PieceKind::Queen, Square::D4, Square::E6),
            Err(IllegalMove::InvalidShape)
        );
    }

    #[test]
    fn path_clear_ignores_endpoints() {
        let board = Board::from_pieces([
            (Square::C1, Piece::WHITE_BISHOP),
            (Square::H6, Piece::BLACK_KNIGHT),
        ]);
        assert!(path_clear(&board, Square::C1, Square::H6));
        let mut blocked = board;
        blocked.set(Square::E3, Some(Piece::BLACK_PAWN));
        assert!(!path_clear(&blocked, Square::C1, Square::H6));
    }

    #[test]
    fn pawns_attack_diagonally_forward_only() {
        assert!(pawn_attacks(Color::White, Square::E4, Square::D5));
        assert!(pawn_attacks(Color::White, Square::E4, Square::F5));
        assert!(!pawn_attacks(Color::White, Square::E4, Square::E5));
        assert!(!pawn_attacks(Color::White, Square::E4, Square::D3));
        assert!(pawn_attacks(Color::Black, Square::E5, Square::D4));
    }

    #[test]
    fn square_attacked_in_starting_position() {
        let board = Board::starting_position();
        assert!(is_square_attacked(&board, Square::E3, Color::White));
        assert!(is_square_attacked(&board, Square::F3, Color::White));
        assert!(!is_square_attacked(&board, Square::E4, Color::White));
        assert!(is_square_attacked(&board, Square::F6, Color::Black));
        assert!(!is_square_attacked(&board, Square::E5, Color::Black));
    }

    #[test]
    fn slider_attack_stops_at_blocker() {
        let board = Board::from_pieces([
            (Square::A1, Piece::WHITE_ROOK),
            (Square::A4, Piece::BLACK_PAWN),
        ]);
        assert!(is_square_attacked(&board, Square::A4, Color::White));
        assert!(!is_square_attacked(&board, Square::A5, Color::White));
    }
}
