//! Table-driven legality checks through the public API, using raw coordinates.

use gambit_core::{Board, IllegalMove, MoveContext, Square, check_move, is_in_check};

/// Check a move given as raw `(row, col)` pairs, validating both ends first.
fn check(board: &Board, from: (i32, i32), to: (i32, i32)) -> Result<(), IllegalMove> {
    let from = Square::try_from(from)?;
    let to = Square::try_from(to)?;
    check_move(board, from, to, &MoveContext::starting()).map(|_| ())
}

#[test]
fn initial_position_table() {
    let board = Board::starting_position();
    let cases = [
        ((6, 0), (4, 0), Ok(())),
        ((6, 0), (5, 0), Ok(())),
        ((6, 0), (3, 0), Err(IllegalMove::InvalidShape)),
        ((7, 0), (0, 0), Err(IllegalMove::PathBlocked)),
        ((7, 0), (6, 0), Err(IllegalMove::OwnPieceCapture)),
        ((7, 0), (3, 0), Err(IllegalMove::PathBlocked)),
        ((7, 1), (5, 2), Ok(())),
        ((7, 1), (5, 1), Err(IllegalMove::InvalidShape)),
        ((4, 4), (3, 4), Err(IllegalMove::EmptyOrigin)),
        ((8, 0), (7, 0), Err(IllegalMove::OutOfBounds)),
        ((6, 0), (6, -1), Err(IllegalMove::OutOfBounds)),
    ];
    for (from, to, expected) in cases {
        assert_eq!(check(&board, from, to), expected, "{from:?} -> {to:?}");
    }
}

#[test]
fn no_legal_move_leaves_own_king_attacked() {
    let board = Board::starting_position();
    let ctx = MoveContext::starting();
    for mv in gambit_core::legal_moves(&board, &ctx) {
        let after = board.make_move(mv);
        assert!(!is_in_check(&after, ctx.side_to_move), "{mv} exposes the king");
    }
}
