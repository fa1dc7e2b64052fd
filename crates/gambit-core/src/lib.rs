//! Core chess rules: board representation, move legality, and game status.

mod attacks;
mod board;
mod castle_rights;
mod check;
mod chess_move;
mod color;
mod error;
mod legality;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod square;
mod square_set;
mod status;

pub use attacks::{attacks, is_square_attacked};
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use check::is_in_check;
pub use chess_move::{Move, MoveKind, PromotionPiece};
pub use color::Color;
pub use error::IllegalMove;
pub use legality::{MoveContext, check_move, check_move_for_turn, is_legal_move};
pub use movegen::{has_legal_move, legal_moves, legal_moves_from};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
pub use status::{GameStatus, game_status};
