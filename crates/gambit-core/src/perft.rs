//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::legality::MoveContext;
use crate::movegen::legal_moves;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(board: &Board, ctx: &MoveContext, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, ctx);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&board.make_move(mv), &ctx.after(mv), depth - 1))
        .sum()
}

/// Run perft with per-move breakdown.
///
/// Returns `(move, node_count)` pairs sorted by move text.
pub fn divide(board: &Board, ctx: &MoveContext, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = legal_moves(board, ctx)
        .into_iter()
        .map(|mv| {
            let count = if depth <= 1 {
                1
            } else {
                perft(&board.make_move(mv), &ctx.after(mv), depth - 1)
            };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    // rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1

    #[test]
    fn perft_startpos_depth_1() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, &MoveContext::starting(), 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, &MoveContext::starting(), 2), 400);
    }

    #[test]
    fn perft_depth_0() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, &MoveContext::starting(), 0), 1);
    }

    #[test]
    fn divide_startpos_depth_2() {
        let board = Board::starting_position();
        let results = divide(&board, &MoveContext::starting(), 2);
        assert_eq!(results.len(), 20);
        for (mv, count) in &results {
            assert_eq!(*count, 20, "{mv}");
        }
        assert_eq!(results[0].0, "a2a3");
    }
}
