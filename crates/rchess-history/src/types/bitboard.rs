//! Bitboard（64bit盤面表現）とナイトの利きテーブル

use super::Square;

/// Bitboard（bit n が Square n に対応）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// 空のBitboard
    pub const EMPTY: Bitboard = Bitboard(0);

    /// 生の値から生成
    #[inline]
    pub const fn new(bits: u64) -> Bitboard {
        Bitboard(bits)
    }

    /// 単一マスのBitboard
    #[inline]
    pub const fn from_square(sq: Square) -> Bitboard {
        Bitboard(1u64 << sq.index())
    }

    /// 内部値を取得
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// 空かどうか
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// 立っているビット数
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// 指定マスが含まれるか
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1u64 << sq.index()) != 0
    }

    /// 立っているマスを昇順に列挙
    #[inline]
    pub const fn iter(self) -> BitboardIter {
        BitboardIter(self.0)
    }

    /// 部分集合を全て列挙（空集合と自身を含む、2^count 個）
    ///
    /// Carry-Rippler 法で `sub = (sub - mask) & mask` を辿る。
    pub fn subsets(self) -> impl Iterator<Item = Bitboard> {
        let mask = self.0;
        let mut next = Some(0u64);
        std::iter::from_fn(move || {
            let sub = next?;
            let succ = sub.wrapping_sub(mask) & mask;
            next = if succ == 0 { None } else { Some(succ) };
            Some(Bitboard(sub))
        })
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl std::ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

/// Bitboardのイテレータ
pub struct BitboardIter(u64);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Square::from_u8(idx)
    }
}

/// ナイトの利き [sq]
pub const KNIGHT_ATTACKS: [Bitboard; Square::NUM] = init_knight_attacks();

const fn init_knight_attacks() -> [Bitboard; Square::NUM] {
    const DELTAS: [(i8, i8); 8] =
        [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];
    let mut result = [Bitboard::EMPTY; Square::NUM];
    let mut sq = 0;
    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut bits = 0u64;
        let mut i = 0;
        while i < DELTAS.len() {
            let f = file + DELTAS[i].0;
            let r = rank + DELTAS[i].1;
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                bits |= 1u64 << ((r * 8 + f) as u32);
            }
            i += 1;
        }
        result[sq] = Bitboard(bits);
        sq += 1;
    }
    result
}

/// ナイトの利き
#[inline]
pub const fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_attacks_counts() {
        assert_eq!(knight_attacks(Square::A1).count(), 2);
        assert_eq!(knight_attacks(Square::B1).count(), 3);
        assert_eq!(knight_attacks(Square::C3).count(), 8);
        assert_eq!(knight_attacks(Square::D4).count(), 8);
        assert_eq!(knight_attacks(Square::H8).count(), 2);
    }

    #[test]
    fn test_knight_attacks_squares() {
        let g1 = knight_attacks(Square::G1);
        let expected: Vec<String> = g1.iter().map(|sq| sq.to_string()).collect();
        assert_eq!(expected, ["e2", "f3", "h3"]);
    }

    #[test]
    fn test_subsets_enumeration() {
        let mask = knight_attacks(Square::B1);
        let subsets: Vec<Bitboard> = mask.subsets().collect();
        assert_eq!(subsets.len(), 8);
        assert_eq!(subsets[0], Bitboard::EMPTY);
        assert!(subsets.contains(&mask));
        assert!(subsets.iter().all(|s| (*s & mask) == *s));

        assert_eq!(Bitboard::EMPTY.subsets().count(), 1);
    }
}
