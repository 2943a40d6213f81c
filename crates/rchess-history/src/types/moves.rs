//! 指し手（Move）

use super::Square;

/// 指し手（16bit）
///
/// - bit 0-5: 移動元
/// - bit 6-11: 移動先
///
/// 成り駒や特殊手の区別は履歴テーブルでは使わないため持たない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Move(u16);

impl Move {
    /// 指し手なし
    pub const NONE: Move = Move(0);

    /// 移動元と移動先から生成
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move(from.raw() as u16 | ((to.raw() as u16) << 6))
    }

    /// 移動元
    #[inline]
    pub const fn from(self) -> Square {
        match Square::from_u8((self.0 & 0x3F) as u8) {
            Some(sq) => sq,
            None => Square::A1,
        }
    }

    /// 移動先
    #[inline]
    pub const fn to(self) -> Square {
        match Square::from_u8(((self.0 >> 6) & 0x3F) as u8) {
            Some(sq) => sq,
            None => Square::A1,
        }
    }

    /// 指し手なしかどうか
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// ButterflyHistory 用の from_to インデックス（0..64*64）
    #[inline]
    pub const fn from_to(self) -> usize {
        self.from().index() * Square::NUM + self.to().index()
    }

    /// UCI形式（"e2e4"）からパース。成り指定の5文字目は無視する。
    pub fn from_uci(s: &str) -> Option<Move> {
        if !(4..=5).contains(&s.len()) || !s.is_ascii() {
            return None;
        }
        let from = Square::from_uci(&s[0..2])?;
        let to = Square::from_uci(&s[2..4])?;
        Some(Move::new(from, to))
    }
}
