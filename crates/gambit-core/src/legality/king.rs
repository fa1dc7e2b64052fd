//! Castling.

use crate::attacks::is_square_attacked;
use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::MoveKind;
use crate::color::Color;
use crate::error::IllegalMove;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveContext;

/// Column of both kings at the start of a game.
const KING_HOME_COL: u8 = 4;

/// Castling sub-rule for a king of color `us` moving two squares sideways.
///
/// Requires the king on its home square, the matching right still held, the
/// rook on its corner, every square between them empty, and the king's origin,
/// transit, and destination squares all free of attack.
pub(super) fn castle(
    board: &Board,
    from: Square,
    to: Square,
    us: Color,
    ctx: &MoveContext,
) -> Result<MoveKind, IllegalMove> {
    let row = us.back_row();
    if from.row() != row || from.col() != KING_HOME_COL || to.row() != row {
        return Err(IllegalMove::InvalidShape);
    }

    let side = [CastleSide::KingSide, CastleSide::QueenSide]
        .into_iter()
        .find(|side| side.king_to_col() == to.col())
        .ok_or(IllegalMove::InvalidShape)?;
    if !ctx.castling.has(us, side) {
        return Err(IllegalMove::InvalidShape);
    }

    let rook_col = side.rook_from_col();
    let rook_home = Square::new(row, rook_col).ok_or(IllegalMove::InvalidShape)?;
    if board.piece_at(rook_home) != Some(Piece::new(PieceKind::Rook, us)) {
        return Err(IllegalMove::InvalidShape);
    }

    let (low, high) = (rook_col.min(KING_HOME_COL), rook_col.max(KING_HOME_COL));
    let path_clear = (low + 1..high)
        .filter_map(|col| Square::new(row, col))
        .all(|sq| board.is_empty_at(sq));
    if !path_clear {
        return Err(IllegalMove::PathBlocked);
    }

    let transit_col = (from.col() + to.col()) / 2;
    let them = us.flip();
    let exposed = [from.col(), transit_col, to.col()]
        .into_iter()
        .filter_map(|col| Square::new(row, col))
        .any(|sq| is_square_attacked(board, sq, them));
    if exposed {
        return Err(IllegalMove::SelfCheck);
    }

    Ok(MoveKind::Castle(side))
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::castle_rights::{CastleRights, CastleSide};
    use crate::chess_move::MoveKind;
    use crate::color::Color;
    use crate::error::IllegalMove;
    use crate::legality::{MoveContext, check_move};
    use crate::piece::Piece;
    use crate::square::Square;

    fn castling_board() -> Board {
        Board::from_pieces([
            (Square::E1, Piece::WHITE_KING),
            (Square::A1, Piece::WHITE_ROOK),
            (Square::H1, Piece::WHITE_ROOK),
            (Square::E8, Piece::BLACK_KING),
            (Square::A8, Piece::BLACK_ROOK),
            (Square::H8, Piece::BLACK_ROOK),
        ])
    }

    fn white() -> MoveContext {
        MoveContext {
            castling: CastleRights::ALL,
            ..MoveContext::bare(Color::White)
        }
    }

    #[test]
    fn both_sides_castle_when_clear() {
        let board = castling_board();
        let ctx = white();
        assert_eq!(
            check_move(&board, Square::E1, Square::G1, &ctx).map(|mv| mv.kind),
            Ok(MoveKind::Castle(CastleSide::KingSide))
        );
        assert_eq!(
            check_move(&board, Square::E1, Square::C1, &ctx).map(|mv| mv.kind),
            Ok(MoveKind::Castle(CastleSide::QueenSide))
        );

        let black = MoveContext {
            side_to_move: Color::Black,
            ..ctx
        };
        assert!(check_move(&board, Square::E8, Square::G8, &black).is_ok());
        assert!(check_move(&board, Square::E8, Square::C8, &black).is_ok());
    }

    #[test]
    fn revoked_right_blocks_castling() {
        let board = castling_board();
        let ctx = MoveContext {
            castling: CastleRights::ALL.remove(CastleRights::WHITE_KING),
            ..white()
        };
        assert_eq!(check_move(&board, Square::E1, Square::G1, &ctx), Err(IllegalMove::InvalidShape));
        assert!(check_move(&board, Square::E1, Square::C1, &ctx).is_ok());
    }

    #[test]
    fn occupied_path_blocks_castling() {
        let mut board = castling_board();
        board.set(Square::B1, Some(Piece::WHITE_KNIGHT));
        assert_eq!(check_move(&board, Square::E1, Square::C1, &white()), Err(IllegalMove::PathBlocked));

        let mut board = castling_board();
        board.set(Square::F1, Some(Piece::BLACK_BISHOP));
        assert_eq!(check_move(&board, Square::E1, Square::G1, &white()), Err(IllegalMove::PathBlocked));
    }

    #[test]
    fn attacked_transit_blocks_castling() {
        let mut board = castling_board();
        board.set(Square::F5, Some(Piece::BLACK_ROOK));
        assert_eq!(check_move(&board, Square::E1, Square::G1, &white()), Err(IllegalMove::SelfCheck));
        assert!(check_move(&board, Square::E1, Square::C1, &white()).is_ok());
    }

    #[test]
    fn cannot_castle_out_of_check() {
        let mut board = castling_board();
        board.set(Square::E5, Some(Piece::BLACK_ROOK));
        assert_eq!(check_move(&board, Square::E1, Square::G1, &white()), Err(IllegalMove::SelfCheck));
        assert_eq!(check_move(&board, Square::E1, Square::C1, &white()), Err(IllegalMove::SelfCheck));
    }

    #[test]
    fn attacked_b_file_square_does_not_block_queenside() {
        let mut board = castling_board();
        board.set(Square::B5, Some(Piece::BLACK_ROOK));
        assert!(check_move(&board, Square::E1, Square::C1, &white()).is_ok());
    }

    #[test]
    fn missing_rook_blocks_castling() {
        let mut board = castling_board();
        board.set(Square::H1, None);
        assert_eq!(check_move(&board, Square::E1, Square::G1, &white()), Err(IllegalMove::InvalidShape));
    }

    #[test]
    fn king_off_home_square_cannot_jump_two() {
        let board = Board::from_pieces([
            (Square::D1, Piece::WHITE_KING),
            (Square::H1, Piece::WHITE_ROOK),
            (Square::E8, Piece::BLACK_KING),
        ]);
        assert_eq!(check_move(&board, Square::D1, Square::F1, &white()), Err(IllegalMove::InvalidShape));
    }
}
