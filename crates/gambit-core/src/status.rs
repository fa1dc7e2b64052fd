//! Game status classification for the side about to move.

use std::fmt;

use crate::board::Board;
use crate::check::is_in_check;
use crate::color::Color;
use crate::legality::MoveContext;
use crate::movegen::has_legal_move;

/// Where the game stands for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Not in check, and there are legal moves.
    #[default]
    Ongoing,
    /// In check, with at least one way out.
    Check,
    /// In check with no legal move. The other side wins.
    Checkmate,
    /// Not in check, but no legal move. A draw.
    Stalemate,
}

impl GameStatus {
    /// Return `true` if no further moves may be played.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    /// The winner when `side_to_move` faces this status.
    #[inline]
    pub const fn winner(self, side_to_move: Color) -> Option<Color> {
        match self {
            GameStatus::Checkmate => Some(side_to_move.flip()),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

/// Classify the position for `ctx.side_to_move`.
pub fn game_status(board: &Board, ctx: &MoveContext) -> GameStatus {
    let in_check = is_in_check(board, ctx.side_to_move);
    match (in_check, has_legal_move(board, ctx)) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, true) => GameStatus::Ongoing,
        (false, false) => GameStatus::Stalemate,
    }
}
