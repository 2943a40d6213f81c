//! 升目（Square）

/// 升目（0-63）
///
/// 配置: A1=0, B1=1, ..., H1=7, A2=8, ..., H8=63（段優先）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 64;

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const C3: Square = Square(18);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const E5: Square = Square(36);
    pub const A8: Square = Square(56);
    pub const H8: Square = Square(63);

    /// 筋（0=a）と段（0=1）から生成
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Square {
        debug_assert!(file < 8 && rank < 8);
        Square(rank * 8 + file)
    }

    /// u8から生成（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Square> {
        if n < 64 { Some(Square(n)) } else { None }
    }

    /// 筋（0-7）
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    /// 段（0-7）
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 >> 3
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

    /// 全升目を A1 から順に列挙
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }

    /// UCI形式の升目（"e4" など）をパース
    pub fn from_uci(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file < 8 && rank < 8 { Some(Square::new(file, rank)) } else { None }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, (b'1' + self.rank()) as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_coordinates() {
        assert_eq!(Square::D4.file(), 3);
        assert_eq!(Square::D4.rank(), 3);
        assert_eq!(Square::new(7, 7), Square::H8);
        assert_eq!(Square::from_u8(64), None);
    }

    #[test]
    fn test_square_uci() {
        assert_eq!(Square::from_uci("e4"), Some(Square::E4));
        assert_eq!(Square::from_uci("a8"), Some(Square::A8));
        assert_eq!(Square::from_uci("i1"), None);
        assert_eq!(Square::from_uci("e"), None);
        assert_eq!(Square::E5.to_string(), "e5");
    }
}
