//! 基本型
//!
//! 履歴テーブルの添字に使う識別子だけを持つ。局面表現そのものは外部にある。

mod bitboard;
mod color;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter, KNIGHT_ATTACKS, knight_attacks};
pub use color::Color;
pub use moves::Move;
pub use piece::{Piece, PieceType};
pub use square::Square;
