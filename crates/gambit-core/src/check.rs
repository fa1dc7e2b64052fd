//! Check detection.

use crate::attacks::is_square_attacked;
use crate::board::Board;
use crate::color::Color;

/// Return `true` if `color`'s king is attacked.
///
/// A board without a king for `color` is treated as not in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(board, king, color.flip()))
}

#[cfg(test)]
mod tests {
    use super::is_in_check;
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_position_is_quiet() {
        let board = Board::starting_position();
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn missing_king_is_not_check() {
        let board = Board::from_pieces([(Square::E4, Piece::BLACK_QUEEN)]);
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn rook_gives_check_along_file() {
        let board = Board::from_pieces([
            (Square::E1, Piece::WHITE_KING),
            (Square::E8, Piece::BLACK_ROOK),
        ]);
        assert!(is_in_check(&board, Color::White));

        let mut shielded = board;
        shielded.set(Square::E4, Some(Piece::WHITE_BISHOP));
        assert!(!is_in_check(&shielded, Color::White));
    }

    #[test]
    fn knight_check_jumps_over_pieces() {
        let board = Board::from_pieces([
            (Square::E8, Piece::BLACK_KING),
            (Square::D7, Piece::BLACK_PAWN),
            (Square::E7, Piece::BLACK_PAWN),
            (Square::F6, Piece::WHITE_KNIGHT),
        ]);
        assert!(is_in_check(&board, Color::Black));
    }

    #[test]
    fn pawn_checks_diagonally_not_straight() {
        let board = Board::from_pieces([
            (Square::E4, Piece::WHITE_KING),
            (Square::D5, Piece::BLACK_PAWN),
        ]);
        assert!(is_in_check(&board, Color::White));

        let board = Board::from_pieces([
            (Square::E4, Piece::WHITE_KING),
            (Square::E5, Piece::BLACK_PAWN),
        ]);
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn own_pieces_never_give_check() {
        let board = Board::from_pieces([
            (Square::E1, Piece::WHITE_KING),
            (Square::E8, Piece::WHITE_ROOK),
        ]);
        assert!(!is_in_check(&board, Color::White));
    }
}
