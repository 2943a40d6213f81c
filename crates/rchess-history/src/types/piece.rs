//! 駒種（PieceType）と駒（Piece）
//!
//! 内部表現は 4bit。
//! - bit 0-2: `PieceType`（1..=6）。0 は `Piece::NONE` のみで使用される。
//! - bit 3: `Color`（0 = White, 1 = Black）。

use super::Color;

/// 駒種（先後の区別なし）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceType {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceType {
    /// 駒種の数（NONEを含まない）
    pub const NUM: usize = 6;

    /// 全ての駒種
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// インデックスとして使用（0 は駒なし用に空けてある）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// 駒（先後の区別あり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Piece(u8);

impl Piece {
    /// 駒なし
    pub const NONE: Piece = Piece(0);

    pub const W_PAWN: Piece = Piece(1);
    pub const W_KNIGHT: Piece = Piece(2);
    pub const W_BISHOP: Piece = Piece(3);
    pub const W_ROOK: Piece = Piece(4);
    pub const W_QUEEN: Piece = Piece(5);
    pub const W_KING: Piece = Piece(6);

    pub const B_PAWN: Piece = Piece(9);
    pub const B_KNIGHT: Piece = Piece(10);
    pub const B_BISHOP: Piece = Piece(11);
    pub const B_ROOK: Piece = Piece(12);
    pub const B_QUEEN: Piece = Piece(13);
    pub const B_KING: Piece = Piece(14);

    /// 駒コードの数（NONE と未使用コードを含む、配列サイズ用）
    pub const NUM: usize = 16;

    /// ColorとPieceTypeから生成
    #[inline]
    pub const fn new(color: Color, piece_type: PieceType) -> Piece {
        Piece(((color as u8) << 3) | piece_type as u8)
    }

    /// 駒なしかどうか
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// 手番
    #[inline]
    pub const fn color(self) -> Color {
        if self.0 & 8 == 0 { Color::White } else { Color::Black }
    }

    /// 駒種（NONE に対して呼んではならない）
    #[inline]
    pub const fn piece_type(self) -> PieceType {
        debug_assert!(!self.is_none());
        match self.0 & 7 {
            1 => PieceType::Pawn,
            2 => PieceType::Knight,
            3 => PieceType::Bishop,
            4 => PieceType::Rook,
            5 => PieceType::Queen,
            _ => PieceType::King,
        }
    }

    /// 駒種部分のインデックス（NONE は 0）
    #[inline]
    pub const fn type_index(self) -> usize {
        (self.0 & 7) as usize
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 内部値を取得
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// 盤上に現れうる全ての駒（NONEを除く12種）
    pub fn all() -> impl Iterator<Item = Piece> {
        Color::ALL
            .into_iter()
            .flat_map(|c| PieceType::ALL.into_iter().map(move |pt| Piece::new(c, pt)))
    }
}
