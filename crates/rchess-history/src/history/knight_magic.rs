//! ナイトの利き先集合の完全ハッシュ
//!
//! 移動元ごとの magic を掛けて上位 8bit を取るだけで、その移動元から到達できるマスの
//! 部分集合（空集合を除く）を [0, 256) の互いに異なる添字に写す。
//! magic はオフラインのランダム探索で求めた値で、実行時には導出しない。
//! 再生成・検証は `tools` クレートの `knight_magic` バイナリで行う。
//!
//! c3-f5 の12マスでは空集合と8マス全体が同じ添字 0 に写る。
//! それ以外のマスでは空集合も含めて衝突しない。

use crate::types::{Bitboard, Square, knight_attacks};

/// knight_attack_index が返す添字の数
pub const KNIGHT_INDEX_NUM: usize = 256;

/// 移動元ごとの magic [from]
#[rustfmt::skip]
pub const KNIGHT_MAGIC: [u64; Square::NUM] = [
    2649526798775546678, 4152603468059905820, 4323738553495348598, 8358822318513263564,
    8233741379241091944, 15862258506660595117, 11034153426427387283, 5179342299017078485,
    13953775647861833869, 9285332830472462433, 4707670090173510570, 633188408852161521,
    9295575317119436597, 2602449537074926626, 10402735044161298543, 5209354341409342328,
    162625749878507151, 1009651158123930541, 17868030413482491775, 18157387793351835647,
    18428448182976380927, 15559866339509124062, 15570116201671053920, 1155280919795624321,
    2486129120195482830, 13187947271813240921, 18406210577484414942, 18427602675714473387,
    18441114298743767039, 13816761900458831871, 6080440195611631637, 17058553541789489427,
    16801810908685894692, 10863528935562739968, 18302056847512170491, 13832238890018011135,
    18441604947771359199, 4539399656176549631, 10034574284689510417, 6922771568222818337,
    4170423972204183689, 13981410758149154305, 1458212938463817744, 14940013606182964225,
    10126812077910748164, 14499197477661460225, 10889334102842943525, 11449759955925008433,
    7662239901190162178, 10624671891104776129, 17829790316069208625, 834552698710835841,
    1569976736693633153, 18290846858870916161, 12326740164105761617, 5482981632183385993,
    9386590720569999446, 5202246693298479759, 15779688972541825106, 13366487713771978889,
    11198365102992539725, 15043574735303614497, 18334953575009493081, 975649118817374295,
];

/// ナイトの利き先集合の添字（0..256）
///
/// `target` は `knight_attacks(from)` の部分集合であること。
#[inline]
pub const fn knight_attack_index(target: Bitboard, from: Square) -> usize {
    (target.raw().wrapping_mul(KNIGHT_MAGIC[from.index()]) >> 56) as usize
}

/// 単射性を検査する部分集合の範囲
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnightIndexDomain {
    /// 空でない部分集合のみ
    NonEmpty,
    /// 空集合を含む全ての部分集合
    All,
}

/// magic で衝突する2つの部分集合を探す
///
/// 衝突がなければ `None`。最初に見つかった組を返す。
pub fn find_knight_collision(
    from: Square,
    magic: u64,
    domain: KnightIndexDomain,
) -> Option<(Bitboard, Bitboard)> {
    let mut seen: [Option<Bitboard>; KNIGHT_INDEX_NUM] = [None; KNIGHT_INDEX_NUM];
    for subset in knight_attacks(from).subsets() {
        if domain == KnightIndexDomain::NonEmpty && subset.is_empty() {
            continue;
        }
        let idx = (subset.raw().wrapping_mul(magic) >> 56) as usize;
        match seen[idx] {
            Some(prev) => return Some((prev, subset)),
            None => seen[idx] = Some(subset),
        }
    }
    None
}

/// magic が `from` の利き先集合に対する完全ハッシュかどうか
#[inline]
pub fn is_perfect_knight_magic(from: Square, magic: u64, domain: KnightIndexDomain) -> bool {
    find_knight_collision(from, magic, domain).is_none()
}
