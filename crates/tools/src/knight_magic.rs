//! ナイト利き先集合の magic 探索
//!
//! ランダムな 64bit 値を候補にして、移動元の全ての利き先部分集合が
//! 上位 8bit で衝突しないものが見つかるまで試す。

use rand::Rng;
use rchess_history::history::{KNIGHT_MAGIC, KnightIndexDomain, find_knight_collision};
use rchess_history::types::{Bitboard, Square};

/// 1マス分の探索結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicFound {
    pub square: Square,
    pub magic: u64,
    /// 見つかるまでに試した候補数（1始まり）
    pub tries: u64,
}

/// `from` に対する完全ハッシュの magic を探す
///
/// `max_tries` 回試して見つからなければ `None`。
pub fn search_magic(
    from: Square,
    domain: KnightIndexDomain,
    rng: &mut impl Rng,
    max_tries: u64,
) -> Option<MagicFound> {
    for tries in 1..=max_tries {
        let magic: u64 = rng.random();
        if find_knight_collision(from, magic, domain).is_none() {
            log::debug!("{from}: found {magic:#018x} after {tries} tries");
            return Some(MagicFound {
                square: from,
                magic,
                tries,
            });
        }
    }
    log::warn!("{from}: no magic found in {max_tries} tries");
    None
}

/// 埋め込みテーブルで衝突が起きるマス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCollision {
    pub square: Square,
    pub first: Bitboard,
    pub second: Bitboard,
}

/// `KNIGHT_MAGIC` を全マス検査し、衝突したマスを返す
pub fn verify_embedded_table(domain: KnightIndexDomain) -> Vec<TableCollision> {
    Square::all()
        .filter_map(|sq| {
            find_knight_collision(sq, KNIGHT_MAGIC[sq.index()], domain).map(|(first, second)| {
                TableCollision {
                    square: sq,
                    first,
                    second,
                }
            })
        })
        .collect()
}

/// 64マス分の magic を Rust の配列リテラルとして整形する（1行4個）
pub fn format_magic_table(magics: &[u64; Square::NUM]) -> String {
    let mut out = String::from("pub const KNIGHT_MAGIC: [u64; Square::NUM] = [\n");
    for row in magics.chunks(4) {
        let line: Vec<String> = row.iter().map(|m| m.to_string()).collect();
        out.push_str("    ");
        out.push_str(&line.join(", "));
        out.push_str(",\n");
    }
    out.push_str("];\n");
    out
}
